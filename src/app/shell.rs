//! The interactive line shell. Reads whitespace-separated tokens from any
//! `BufRead`, writes to any `Write`, so sessions can be scripted in tests.

use crate::app::random::{random_extreme_skills, random_skills};
use crate::core::codec::TextSerialize;
use crate::core::sorter::SkillSorter;
use crate::domain::model::Volunteer;
use crate::domain::ports::{ConfigProvider, Storage};
use crate::domain::skills::GROUP_COUNT;
use crate::utils::error::{Result, SorterError};
use crate::utils::rng::Rng;
use std::collections::VecDeque;
use std::io::{BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Help,
    Exit,
    Overview,
    Show,
    Add,
    Delete,
    Move,
    Clear,
    Random,
}

struct CommandSpec {
    name: &'static str,
    short: &'static str,
    description: &'static str,
    command: Command,
}

const COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        name: "help",
        short: "h",
        description: "Print this help message.",
        command: Command::Help,
    },
    CommandSpec {
        name: "exit",
        short: "ex",
        description: "Save and exit the program.",
        command: Command::Exit,
    },
    CommandSpec {
        name: "overview",
        short: "o",
        description: "Print overview information on how each group is balanced.",
        command: Command::Overview,
    },
    CommandSpec {
        name: "show",
        short: "s",
        description: "Print a group's member information.",
        command: Command::Show,
    },
    CommandSpec {
        name: "add",
        short: "a",
        description: "Add a volunteer to the group that keeps the groups best balanced.",
        command: Command::Add,
    },
    CommandSpec {
        name: "delete",
        short: "d",
        description: "Delete a volunteer from a group.",
        command: Command::Delete,
    },
    CommandSpec {
        name: "move",
        short: "m",
        description: "Move a volunteer from one group to another.",
        command: Command::Move,
    },
    CommandSpec {
        name: "clear",
        short: "clr",
        description: "Delete everything.",
        command: Command::Clear,
    },
    CommandSpec {
        name: "random",
        short: "ra",
        description: "Feed random data to the program for bulk testing.",
        command: Command::Random,
    },
];

/// Whitespace-tokenized reader over buffered input, line by line.
struct TokenReader<R: BufRead> {
    input: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    fn new(input: R) -> Self {
        Self {
            input,
            pending: VecDeque::new(),
        }
    }

    fn next_token(&mut self) -> Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }
}

pub struct Shell<S: Storage, C: ConfigProvider> {
    sorter: SkillSorter,
    storage: S,
    config: C,
    rng: Rng,
}

impl<S: Storage, C: ConfigProvider> Shell<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        let rng = match config.random_seed() {
            Some(seed) => Rng::new(seed),
            None => Rng::from_entropy(),
        };
        Self {
            sorter: SkillSorter::new(),
            storage,
            config,
            rng,
        }
    }

    pub fn sorter(&self) -> &SkillSorter {
        &self.sorter
    }

    /// The input-execute-print loop. Loads persisted data first, prints the
    /// help table, then dispatches commands until `exit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut out: W) -> Result<()> {
        self.load_data(&mut out)?;
        self.print_help(&mut out)?;

        let mut tokens = TokenReader::new(input);
        loop {
            write!(out, "> ")?;
            out.flush()?;

            let Some(token) = tokens.next_token()? else {
                break;
            };
            let Some(spec) = COMMANDS
                .iter()
                .find(|spec| spec.name == token || spec.short == token)
            else {
                writeln!(
                    out,
                    "> ERROR: unknown command `{}`. Use `help` to list the available commands.",
                    token
                )?;
                continue;
            };

            if spec.command == Command::Exit {
                self.save_data(&mut out)?;
                writeln!(out, "Program terminated.")?;
                break;
            }

            // Bad input never kills the loop; report and keep going.
            if let Err(error) = self.execute(spec.command, &mut tokens, &mut out) {
                writeln!(out, "{} > ERROR: {}", spec.name, error)?;
            }
        }

        Ok(())
    }

    /// Load the persisted document. Absence or corruption is not an error;
    /// the session just starts from an empty sorter.
    fn load_data<W: Write>(&mut self, out: &mut W) -> Result<()> {
        writeln!(out, "Attempting to load saved data...")?;

        let document = match self.storage.read_to_string(self.config.data_file()) {
            Ok(document) => document,
            Err(error) => {
                tracing::debug!("no saved data at `{}`: {}", self.config.data_file(), error);
                writeln!(out, "Could not load saved data. Starting fresh.")?;
                return Ok(());
            }
        };

        // A trailing newline from the editor or the writer is not part of
        // the document.
        let trimmed = document
            .strip_suffix('\n')
            .map(|d| d.strip_suffix('\r').unwrap_or(d))
            .unwrap_or(&document);

        match SkillSorter::from_text(trimmed) {
            Ok(sorter) => {
                self.sorter = sorter;
                tracing::info!(
                    "loaded {} volunteers from `{}`",
                    self.sorter.total_volunteers(),
                    self.config.data_file()
                );
                writeln!(out, "Data loaded.")?;
            }
            Err(error) => {
                tracing::warn!("could not decode saved data: {}", error);
                writeln!(out, "Could not load saved data. Starting fresh.")?;
            }
        }

        Ok(())
    }

    fn save_data<W: Write>(&mut self, out: &mut W) -> Result<()> {
        writeln!(out, "Saving data...")?;
        match self
            .storage
            .write_string(self.config.data_file(), &self.sorter.to_text())
        {
            Ok(()) => writeln!(out, "Data saved.")?,
            Err(error) => {
                tracing::error!("failed to save data: {}", error);
                writeln!(out, "Failed to save data.")?;
            }
        }
        Ok(())
    }

    fn execute<R: BufRead, W: Write>(
        &mut self,
        command: Command,
        tokens: &mut TokenReader<R>,
        out: &mut W,
    ) -> Result<()> {
        match command {
            Command::Help => self.print_help(out),
            Command::Exit => Ok(()),
            Command::Overview => self.overview(out),
            Command::Show => self.show(tokens, out),
            Command::Add => self.add(tokens, out),
            Command::Delete => self.delete(tokens, out),
            Command::Move => self.move_between(tokens, out),
            Command::Clear => self.clear(out),
            Command::Random => self.random(tokens, out),
        }
    }

    fn print_help<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "Command\tShortcut\tDescription")?;
        for spec in COMMANDS {
            writeln!(out, "{}\t({})\t{}", spec.name, spec.short, spec.description)?;
        }
        Ok(())
    }

    fn overview<W: Write>(&self, out: &mut W) -> Result<()> {
        for (index, group) in self.sorter.groups().iter().enumerate() {
            writeln!(
                out,
                "Group {} ({} volunteers): {}",
                index,
                group.member_count(),
                group.skills_totals()
            )?;
        }
        writeln!(out, "Total volunteers: {}", self.sorter.total_volunteers())?;
        Ok(())
    }

    fn show<R: BufRead, W: Write>(&self, tokens: &mut TokenReader<R>, out: &mut W) -> Result<()> {
        writeln!(
            out,
            "show > Please specify which group you would like to view. [0-{}]",
            GROUP_COUNT - 1
        )?;
        let index = prompt_index("show", tokens, out)?;
        self.print_group_stats(index, out)
    }

    fn print_group_stats<W: Write>(&self, index: usize, out: &mut W) -> Result<()> {
        let stats = self.sorter.group_stats(index)?;
        writeln!(out, "Group {}", index)?;
        writeln!(out, "SkillSet\tMembers")?;
        for (skills, count) in &stats {
            writeln!(out, "{}\t\t{}", skills, count)?;
        }
        Ok(())
    }

    fn add<R: BufRead, W: Write>(&mut self, tokens: &mut TokenReader<R>, out: &mut W) -> Result<()> {
        writeln!(
            out,
            "add > Please input the skill set of the new volunteer. e.g. ABC, BBA, CDE"
        )?;
        let skills = prompt_token("add", tokens, out)?.to_uppercase();
        let index = self.sorter.add_volunteer(Volunteer::parse(&skills)?)?;
        tracing::debug!("volunteer `{}` assigned to group {}", skills, index);
        writeln!(
            out,
            "add > The volunteer with skills `{}` has been added to group {}",
            skills, index
        )?;
        Ok(())
    }

    fn delete<R: BufRead, W: Write>(
        &mut self,
        tokens: &mut TokenReader<R>,
        out: &mut W,
    ) -> Result<()> {
        writeln!(out, "delete > Choose a group to manipulate [0-{}]", GROUP_COUNT - 1)?;
        let group_index = prompt_index("delete", tokens, out)?;
        self.print_group_stats(group_index, out)?;

        writeln!(out, "delete > Choose a volunteer from the table above.")?;
        writeln!(
            out,
            "delete > Volunteers with the same skills are interchangeable."
        )?;
        let skills = prompt_token("delete", tokens, out)?.to_uppercase();

        self.sorter.delete_volunteer(&skills, group_index)?;
        writeln!(
            out,
            "delete > A volunteer of skills `{}` has been deleted from group {}",
            skills, group_index
        )?;
        Ok(())
    }

    fn move_between<R: BufRead, W: Write>(
        &mut self,
        tokens: &mut TokenReader<R>,
        out: &mut W,
    ) -> Result<()> {
        writeln!(out, "move > Choose a group to manipulate [0-{}]", GROUP_COUNT - 1)?;
        let from = prompt_index("move", tokens, out)?;
        self.print_group_stats(from, out)?;

        writeln!(out, "move > Choose a volunteer from the table above.")?;
        let skills = prompt_token("move", tokens, out)?.to_uppercase();

        writeln!(
            out,
            "move > Please choose the target group to move to [0-{}]",
            GROUP_COUNT - 1
        )?;
        let to = prompt_index("move", tokens, out)?;

        self.sorter.move_volunteer(&skills, from, to)?;
        writeln!(
            out,
            "move > A volunteer of skills `{}` has been moved from group {} to {}",
            skills, from, to
        )?;
        Ok(())
    }

    fn clear<W: Write>(&mut self, out: &mut W) -> Result<()> {
        self.sorter.delete_all();
        writeln!(out, "clear > Everything deleted.")?;
        Ok(())
    }

    fn random<R: BufRead, W: Write>(
        &mut self,
        tokens: &mut TokenReader<R>,
        out: &mut W,
    ) -> Result<()> {
        writeln!(
            out,
            "random > How many volunteers with random skill sets would you like?"
        )?;
        let total = prompt_index("random", tokens, out)?;
        if total == 0 {
            return Err(SorterError::InvalidInput {
                message: "volunteer count must be positive".to_string(),
            });
        }

        writeln!(
            out,
            "random > Would you like an extreme test set? [y/n] (default: n)"
        )?;
        let extreme = prompt_token("random", tokens, out)? == "y";

        for _ in 0..total {
            let skills = if extreme {
                random_extreme_skills(&mut self.rng)
            } else {
                random_skills(&mut self.rng)
            };
            self.sorter.add_volunteer(Volunteer::parse(&skills)?)?;
        }

        writeln!(out, "random > Added {} random volunteers.", total)?;
        writeln!(
            out,
            "random > Use `overview` to see how the groups are balanced."
        )?;
        Ok(())
    }
}

fn prompt_token<R: BufRead, W: Write>(
    name: &str,
    tokens: &mut TokenReader<R>,
    out: &mut W,
) -> Result<String> {
    write!(out, "{} >> ", name)?;
    out.flush()?;
    tokens.next_token()?.ok_or_else(|| SorterError::InvalidInput {
        message: "unexpected end of input".to_string(),
    })
}

fn prompt_index<R: BufRead, W: Write>(
    name: &str,
    tokens: &mut TokenReader<R>,
    out: &mut W,
) -> Result<usize> {
    let token = prompt_token(name, tokens, out)?;
    token.parse().map_err(|_| SorterError::InvalidInput {
        message: format!("`{}` is not a non-negative integer", token),
    })
}
