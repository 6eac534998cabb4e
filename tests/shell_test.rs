use skillsort::domain::ports::Storage;
use skillsort::utils::error::Result;
use skillsort::{Settings, Shell, SorterError, TextSerialize};
use std::cell::RefCell;
use std::collections::HashMap;
use std::io::Cursor;
use std::rc::Rc;

/// In-memory stand-in for the flat-file storage, shared between the shell
/// under test and the assertions.
#[derive(Clone, Default)]
struct MemoryStorage {
    files: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    fn file(&self, path: &str) -> Option<String> {
        self.files.borrow().get(path).cloned()
    }
}

impl Storage for MemoryStorage {
    fn read_to_string(&self, path: &str) -> Result<String> {
        self.files.borrow().get(path).cloned().ok_or_else(|| {
            SorterError::IoError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("no such file: {path}"),
            ))
        })
    }

    fn write_string(&self, path: &str, contents: &str) -> Result<()> {
        self.files
            .borrow_mut()
            .insert(path.to_string(), contents.to_string());
        Ok(())
    }
}

fn settings() -> Settings {
    Settings {
        data_file: "volunteers.dat".to_string(),
        seed: Some(42),
        verbose: false,
    }
}

fn run_session(script: &str) -> (Shell<MemoryStorage, Settings>, MemoryStorage, String) {
    let storage = MemoryStorage::default();
    let mut shell = Shell::new(storage.clone(), settings());
    let mut output = Vec::new();
    shell.run(Cursor::new(script.to_string()), &mut output).unwrap();
    (shell, storage, String::from_utf8(output).unwrap())
}

#[test]
fn test_help_lists_every_command() {
    let (_, _, transcript) = run_session("help\nexit\n");
    for name in [
        "help", "exit", "overview", "show", "add", "delete", "move", "clear", "random",
    ] {
        assert!(transcript.contains(name), "help is missing `{name}`");
    }
}

#[test]
fn test_add_reports_the_assigned_group() {
    let (shell, _, transcript) = run_session("add abc\nexit\n");

    // Input is upper-cased before parsing.
    assert!(transcript.contains("The volunteer with skills `ABC` has been added to group 0"));
    assert_eq!(shell.sorter().total_volunteers(), 1);
}

#[test]
fn test_exit_saves_the_document() {
    let (shell, storage, transcript) = run_session("add AAB\nadd CDE\nexit\n");

    assert!(transcript.contains("Data saved."));
    assert_eq!(
        storage.file("volunteers.dat").unwrap(),
        shell.sorter().to_text()
    );
}

#[test]
fn test_eof_without_exit_does_not_save() {
    let (_, storage, _) = run_session("add AAB\n");
    assert!(storage.file("volunteers.dat").is_none());
}

#[test]
fn test_show_prints_the_stat_table() {
    // The balancer spreads the two equal volunteers over two groups; moving
    // the second one back makes group 0 hold both. `ABA` and `AAB` are the
    // same skill set, so the table counts them under one canonical entry.
    let (_, _, transcript) = run_session("add AAB\nadd ABA\nmove 1 AAB 0\nshow 0\nexit\n");

    assert!(transcript.contains("SkillSet\tMembers"));
    assert!(transcript.contains("AAB\t\t2"));
}

#[test]
fn test_delete_flow() {
    let (shell, _, transcript) = run_session("add AAB\ndelete 0 AAB\nexit\n");

    assert!(transcript.contains("has been deleted from group 0"));
    assert_eq!(shell.sorter().total_volunteers(), 0);
}

#[test]
fn test_move_flow() {
    let (shell, _, transcript) = run_session("add AAB\nmove 0 AAB 3\nexit\n");

    assert!(transcript.contains("has been moved from group 0 to 3"));
    assert_eq!(shell.sorter().groups()[3].stats().get("AAB"), Some(&1));
}

#[test]
fn test_clear_flow() {
    let (shell, _, transcript) = run_session("add AAB\nadd CDE\nclear\nexit\n");

    assert!(transcript.contains("Everything deleted."));
    assert_eq!(shell.sorter().total_volunteers(), 0);
}

#[test]
fn test_random_feed_is_seeded_and_counted() {
    let (shell, _, transcript) = run_session("random 10 n\noverview\nexit\n");

    assert!(transcript.contains("Added 10 random volunteers."));
    assert!(transcript.contains("Total volunteers: 10"));
    assert_eq!(shell.sorter().total_volunteers(), 10);

    // Same seed, same distribution.
    let (other, _, _) = run_session("random 10 n\nexit\n");
    assert_eq!(shell.sorter().to_text(), other.sorter().to_text());
}

#[test]
fn test_random_extreme_feed_spreads_over_groups() {
    let (shell, _, _) = run_session("random 25 y\nexit\n");
    assert_eq!(shell.sorter().total_volunteers(), 25);

    // Extreme sets are single-skill triples.
    for group in shell.sorter().groups() {
        for (skills, _) in group.stats() {
            let mut chars = skills.chars();
            let first = chars.next().unwrap();
            assert!(chars.all(|c| c == first), "not extreme: {skills}");
        }
    }
}

#[test]
fn test_errors_are_reported_and_the_loop_continues() {
    let (shell, _, transcript) = run_session("add XYZ\nadd ABC\nexit\n");

    assert!(transcript.contains("add > ERROR: invalid skill string `XYZ`"));
    assert!(transcript.contains("has been added to group 0"));
    assert_eq!(shell.sorter().total_volunteers(), 1);
}

#[test]
fn test_unknown_command_prints_a_hint() {
    let (_, _, transcript) = run_session("bogus\nexit\n");
    assert!(transcript.contains("unknown command `bogus`"));
    assert!(transcript.contains("help"));
}

#[test]
fn test_non_integer_group_index_is_rejected() {
    let (_, _, transcript) = run_session("show first\nexit\n");
    assert!(transcript.contains("show > ERROR: invalid input"));
}

#[test]
fn test_delete_from_wrong_group_reports_not_found() {
    let (shell, _, transcript) = run_session("add AAB\ndelete 4 AAB\nexit\n");

    assert!(transcript.contains("delete > ERROR: no volunteer with skills `AAB` in group 4"));
    assert_eq!(shell.sorter().total_volunteers(), 1);
}

#[test]
fn test_session_restores_previous_state() {
    let storage = MemoryStorage::default();

    let mut shell = Shell::new(storage.clone(), settings());
    let mut output = Vec::new();
    shell
        .run(Cursor::new("add AAB\nadd CDE\nexit\n".to_string()), &mut output)
        .unwrap();

    let mut restored = Shell::new(storage, settings());
    let mut output = Vec::new();
    restored
        .run(Cursor::new("exit\n".to_string()), &mut output)
        .unwrap();

    assert!(String::from_utf8(output).unwrap().contains("Data loaded."));
    assert_eq!(restored.sorter().to_text(), shell.sorter().to_text());
}
