use afaire::command::parse_command;
use afaire::config::Config;
use afaire::context::{AppContext, SharedContext, TestContext};
use afaire::controller::{Controller, Outcome};
use afaire::error::CommandError;
use afaire::storage::LocalStorage;
use std::rc::Rc;

fn controller_with_ctx(autosave: bool) -> (Controller, Rc<TestContext>) {
    let ctx = Rc::new(TestContext::new());
    let shared: SharedContext = ctx.clone();
    let config = Config {
        autosave,
        ..Config::default()
    };
    (Controller::new(shared, config), ctx)
}

fn message(outcome: Outcome) -> String {
    match outcome {
        Outcome::Message(m) => m,
        Outcome::Exit(m) => panic!("unexpected exit outcome: {}", m),
    }
}

fn run(controller: &mut Controller, line: &str) -> String {
    let cmd = parse_command(line).unwrap();
    message(controller.execute(cmd).unwrap())
}

#[test]
fn test_add_then_list_shows_one_based_numbering() {
    let (mut controller, _ctx) = controller_with_ctx(true);

    let reply = run(&mut controller, "todo read book");
    assert!(reply.contains("[T][ ] read book"));
    assert!(reply.contains("You now have 1 task(s) on the list."));

    let listing = run(&mut controller, "list");
    assert!(listing.contains("1. [T][ ] read book"));
}

#[test]
fn test_list_on_empty_container() {
    let (mut controller, _ctx) = controller_with_ctx(true);
    let reply = run(&mut controller, "list");
    assert_eq!(reply, "There is nothing on your list.");
}

#[test]
fn test_mark_and_unmark_round_trip() {
    let (mut controller, _ctx) = controller_with_ctx(true);
    run(&mut controller, "todo read book");

    let reply = run(&mut controller, "mark 1");
    assert!(reply.starts_with("Marked as done:"));
    assert!(reply.contains("[T][X] read book"));

    let reply = run(&mut controller, "unmark 1");
    assert!(reply.starts_with("Marked as not done yet:"));
    assert!(reply.contains("[T][ ] read book"));
    assert!(!controller.store().get(0).unwrap().done);
}

#[test]
fn test_delete_reports_removed_task_and_new_size() {
    let (mut controller, _ctx) = controller_with_ctx(true);
    run(&mut controller, "todo read book");
    run(&mut controller, "todo water plants");

    let reply = run(&mut controller, "delete 1");
    assert!(reply.contains("[T][ ] read book"));
    assert!(reply.contains("You now have 1 task(s) on the list."));
    assert_eq!(controller.store().get(0).unwrap().summary, "water plants");
}

#[test]
fn test_out_of_range_is_reported_and_container_unchanged() {
    let (mut controller, _ctx) = controller_with_ctx(true);
    run(&mut controller, "todo read book");

    let cmd = parse_command("delete 5").unwrap();
    let err = controller.execute(cmd).unwrap_err();
    assert_eq!(err, CommandError::IndexOutOfRange { index: 5, size: 1 });
    assert_eq!(controller.store().len(), 1);
}

#[test]
fn test_find_text_lists_matches_with_original_numbers() {
    let (mut controller, _ctx) = controller_with_ctx(true);
    run(&mut controller, "todo read book");
    run(&mut controller, "todo water plants");
    run(&mut controller, "todo book flights");

    let reply = run(&mut controller, "find book");
    assert!(reply.contains("1. [T][ ] read book"));
    assert!(reply.contains("3. [T][ ] book flights"));
    assert!(!reply.contains("water plants"));

    let reply = run(&mut controller, "find laundry");
    assert_eq!(reply, "Nothing on your list matches 'laundry'.");
}

#[test]
fn test_check_lists_tasks_falling_on_date() {
    let (mut controller, _ctx) = controller_with_ctx(true);
    run(&mut controller, "todo read book");
    run(&mut controller, "deadline submit report /by 2019-10-15");
    run(
        &mut controller,
        "event project meeting /from 2019-10-15 /to 2019-10-16",
    );

    let reply = run(&mut controller, "check 2019-10-15");
    assert!(reply.contains("2. [D][ ] submit report (by: 2019-10-15)"));
    assert!(reply.contains("3. [E][ ] project meeting (from: 2019-10-15 to: 2019-10-16)"));
    assert!(!reply.contains("read book"));

    let reply = run(&mut controller, "check 2030-01-01");
    assert_eq!(reply, "Nothing on your list falls on 2030-01-01.");
}

#[test]
fn test_bye_is_an_exit_outcome() {
    let (mut controller, _ctx) = controller_with_ctx(true);
    let cmd = parse_command("bye").unwrap();
    assert!(matches!(controller.execute(cmd), Ok(Outcome::Exit(_))));
}

#[test]
fn test_mutations_autosave_to_the_store_file() {
    let (mut controller, ctx) = controller_with_ctx(true);
    run(&mut controller, "todo read book");
    run(&mut controller, "mark 1");

    let persisted = LocalStorage::load(ctx.as_ref()).unwrap();
    assert_eq!(persisted.len(), 1);
    assert!(persisted[0].done);
    assert_eq!(persisted[0].summary, "read book");
}

#[test]
fn test_autosave_off_suppresses_writes() {
    let (mut controller, ctx) = controller_with_ctx(false);
    run(&mut controller, "todo read book");

    let persisted = LocalStorage::load(ctx.as_ref()).unwrap();
    assert!(persisted.is_empty());
}

#[test]
fn test_failed_load_blocks_saving_over_the_store_file() {
    let ctx = Rc::new(TestContext::new());
    let garbage = "Z | ? | what even is this\n";
    std::fs::write(ctx.get_task_file_path().unwrap(), garbage).unwrap();

    let shared: SharedContext = ctx.clone();
    let mut controller = Controller::new(shared, Config::default());
    assert!(controller.load().is_err());

    let reply = run(&mut controller, "todo read book");
    assert!(reply.contains("not saving"));

    // The unreadable file must be untouched.
    let on_disk = std::fs::read_to_string(ctx.get_task_file_path().unwrap()).unwrap();
    assert_eq!(on_disk, garbage);
}
