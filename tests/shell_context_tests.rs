mod common;

use fineasy::cli::CliMode;
use fineasy::domain::{TransactionDraft, TransactionKind};
use fineasy::services::SummaryService;

#[test]
fn scripted_session_updates_repository() {
    let home = common::plain_home();
    let context = common::run_script(
        home.path(),
        "add Salary 1000 entrada Salário\nadd Rent 400 saida Aluguel\nadd Uber 30 saida Transporte Trabalho\n",
    );

    let records = context.repository().all();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].description, "Uber");
    assert_eq!(records[0].category, "Trabalho");
    assert_eq!(records[2].kind, TransactionKind::Inflow);
    assert_eq!(SummaryService::balance(records), 570.0);
    assert_eq!(context.mode(), CliMode::Script);
}

#[test]
fn records_survive_a_new_session() {
    let home = common::plain_home();
    common::run_script(home.path(), "add Rent 400 saida Aluguel\n");

    let reopened = common::script_context(home.path());
    assert_eq!(reopened.repository().len(), 1);
    assert_eq!(reopened.repository().all()[0].category, "Aluguel");
}

#[test]
fn remove_by_position_deletes_the_record() {
    let home = common::plain_home();
    let context = common::run_script(
        home.path(),
        "add Salary 1000 entrada\nadd Rent 400 saida Aluguel\nremove 1\nremove 9\n",
    );

    let records = context.repository().all();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].description, "Salary");
}

#[test]
fn exit_stops_processing_remaining_lines() {
    let home = common::plain_home();
    let context = common::run_script(home.path(), "add A 1\nexit\nadd B 2\n");
    assert_eq!(context.repository().len(), 1);
    assert!(!context.running);
}

#[test]
fn changing_storage_key_switches_slot() {
    let home = common::plain_home();
    let context = common::run_script(
        home.path(),
        "add Rent 400 saida Aluguel\nconfig set storage-key @fineasy:teste\nadd Gift 50 entrada\n",
    );

    assert_eq!(context.config().storage_key, "@fineasy:teste");
    assert_eq!(context.repository().len(), 1);
    assert!(home.path().join("data").join("fineasy-teste.json").exists());
    assert!(common::slot_path(home.path()).exists());
}

#[test]
fn command_errors_do_not_abort_the_script() {
    let home = common::plain_home();
    let context = common::run_script(
        home.path(),
        "add Lunch\nconfig set currency euros\nadd Lunch 12\n",
    );
    assert_eq!(context.repository().len(), 1);
    assert_eq!(context.config().currency, "BRL");
}

#[test]
fn rejected_add_does_not_touch_the_entry_form() {
    let home = common::plain_home();
    let context = common::run_script(home.path(), "add Lunch 0 saida Lazer\nadd Taxi abc\n");
    assert!(context.repository().is_empty());
    assert_eq!(context.form, TransactionDraft::default());
}

#[test]
fn unusable_data_dir_keeps_previous_config() {
    let home = common::plain_home();
    let blocker = home.path().join("blocker");
    std::fs::write(&blocker, "not a directory").unwrap();

    let script = format!(
        "add Rent 400 saida Aluguel\nconfig set data-dir '{}'\n",
        blocker.join("sub").display()
    );
    let context = common::run_script(home.path(), &script);
    assert_eq!(context.config().data_dir, None);
    assert_eq!(context.repository().len(), 1);

    let saved = context.config_manager().load().unwrap();
    assert_eq!(saved.data_dir, None);

    let reopened = common::script_context(home.path());
    assert_eq!(reopened.repository().len(), 1);
}
