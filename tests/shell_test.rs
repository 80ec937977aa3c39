// End-to-end shell sessions
use pgtutor::config::TableStyle;
use pgtutor::{ContentLibrary, Reply, Tutor};

fn run(tutor: &mut Tutor, lines: &[&str]) -> String {
    let mut out = String::new();
    for line in lines {
        match tutor.feed_line(line) {
            Reply::Output(text) => out.push_str(&text),
            Reply::Quit => break,
        }
    }
    out
}

#[test]
fn test_lesson_walkthrough() {
    let mut tutor = Tutor::new(ContentLibrary::embedded().unwrap(), TableStyle::Utf8).unwrap();
    let out = run(
        &mut tutor,
        &["\\lessons", "\\lesson 1", "\\steps carriers", "\\explain 4", "SELECT * FROM users;"],
    );
    assert!(out.contains("Part 1:"));
    assert!(out.contains("Query Only Carriers"));
    assert!(out.contains("(3 rows)"));
}

#[test]
fn test_every_editable_step_runs() {
    let library = ContentLibrary::embedded().unwrap();
    let lessons: Vec<(u8, Vec<bool>)> = library
        .curriculum
        .lessons()
        .iter()
        .map(|l| (l.part, l.steps.iter().map(|s| s.editable).collect()))
        .collect();
    let mut tutor = Tutor::new(library, TableStyle::Ascii).unwrap();

    for (part, steps) in lessons {
        run(&mut tutor, &[&format!("\\lesson {part}")]);
        for (n, editable) in steps.into_iter().enumerate().map(|(i, e)| (i + 1, e)) {
            let out = run(&mut tutor, &[&format!("\\run {n}")]);
            assert_eq!(!out.starts_with("Error: "), editable, "part {part} step {n}: {out}");
        }
    }
}

#[test]
fn test_exit_stops_processing() {
    let mut tutor = Tutor::new(ContentLibrary::embedded().unwrap(), TableStyle::Ascii).unwrap();
    assert_eq!(tutor.feed_line("\\quit"), Reply::Quit);
}

#[test]
fn test_read_only_step_leaves_page_untouched() {
    let mut tutor = Tutor::new(ContentLibrary::embedded().unwrap(), TableStyle::Ascii).unwrap();
    let out = run(&mut tutor, &["\\lesson 1", "\\run 1"]);
    assert!(out.contains("read-only"), "{out}");
    assert!(tutor.session().last_result().is_none());
}
