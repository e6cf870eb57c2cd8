//! Search and filter behaviour across the record pages, driven through the
//! same `Page` API the UI uses.

use opsboard::core::Context;
use opsboard::domain::employee::Employee;
use opsboard::domain::equipment::{Condition, EquipmentItem};
use opsboard::domain::expense::{Expense, ExpenseStatus};
use opsboard::domain::payroll::PayrollRecord;
use opsboard::domain::task::{Task, TaskStatus};
use opsboard::domain::{seed, FilterError, StatsScope};
use opsboard::modules::pages::Page;
use rstest::{fixture, rstest};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[fixture]
fn expenses() -> Page<Expense> {
    Page::new(seed::expenses())
}

#[fixture]
fn tasks() -> Page<Task> {
    Page::new(seed::tasks())
}

#[fixture]
fn ctx() -> Context {
    Context::default()
}

#[rstest]
fn default_criteria_keep_every_record() {
    assert_eq!(Page::new(seed::expenses()).visible().len(), 6);
    assert_eq!(Page::new(seed::equipment()).visible().len(), 12);
    assert_eq!(Page::new(seed::tasks()).visible().len(), 6);
    assert_eq!(Page::new(seed::payroll()).visible().len(), 6);
    assert_eq!(Page::new(seed::employees()).visible().len(), 8);
}

#[rstest]
#[case("JOHN", &["EMP001", "EMP003"])]
#[case("john doe", &["EMP001"])]
#[case("supervisor", &["EMP002"])]
#[case("emp00", &["EMP001", "EMP002", "EMP003", "EMP004", "EMP005", "EMP006", "EMP007", "EMP008"])]
#[case("nobody", &[])]
fn employee_search_is_case_insensitive_substring(#[case] query: &str, #[case] ids: &[&str]) {
    let mut page: Page<Employee> = Page::new(seed::employees());
    page.set_query(query);
    let found: Vec<&str> = page.visible().iter().map(|e| e.id.as_str()).collect();
    assert_eq!(found, ids);
}

#[rstest]
fn selector_and_query_are_conjoined(mut expenses: Page<Expense>) {
    expenses.apply_filter_args("status:approved").unwrap();
    // Only the pending cement purchase mentions cement.
    expenses.set_query("cement");
    assert!(expenses.visible().is_empty());
}

#[rstest]
fn empty_set_summarizes_to_zero(mut expenses: Page<Expense>, ctx: Context) {
    expenses.set_query("zzz");
    let summary = expenses.summary(&ctx);
    assert_eq!(summary.count, 0);
    assert_eq!(summary.total, Decimal::ZERO);
    assert_eq!(summary.approved, Decimal::ZERO);
    assert_eq!(summary.pending, Decimal::ZERO);
}

#[rstest]
fn expense_seed_totals(expenses: Page<Expense>, ctx: Context) {
    let summary = expenses.summary(&ctx);
    assert_eq!(summary.count, 6);
    assert_eq!(summary.total, dec!(3014.30));
    assert_eq!(summary.approved, dec!(1318.50));
    assert_eq!(summary.pending, dec!(1250.00));
}

#[rstest]
fn approved_filter_drops_pending_and_rejected(mut expenses: Page<Expense>) {
    expenses.apply_filter_args("status:approved").unwrap();
    let visible = expenses.visible();
    assert_eq!(visible.len(), 4);
    assert!(visible.iter().all(|e| e.status == ExpenseStatus::Approved));
}

#[rstest]
fn excellent_condition_keeps_only_excellent_items() {
    let mut page: Page<EquipmentItem> = Page::new(seed::equipment());
    page.apply_filter_args("condition:excellent").unwrap();
    let visible = page.visible();
    assert_eq!(visible.len(), 4);
    assert!(visible.iter().all(|e| e.condition == Condition::Excellent));
}

#[rstest]
fn overdue_drill_search_finds_the_repair(mut tasks: Page<Task>) {
    tasks.apply_filter_args("status:overdue").unwrap();
    tasks.set_query("drill");
    let visible = tasks.visible();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].name, "Equipment Repair");
    assert_eq!(visible[0].status, TaskStatus::Overdue);
}

#[rstest]
#[case("status:in-progress", 1)]
#[case("status:in_progress priority:high", 1)]
#[case("priority:high", 4)]
#[case("category:maintenance", 2)]
#[case("status:all", 6)]
fn task_filter_arguments(mut tasks: Page<Task>, #[case] args: &str, #[case] expected: usize) {
    tasks.apply_filter_args(args).unwrap();
    assert_eq!(tasks.visible().len(), expected);
}

#[rstest]
#[case("colour:red")]
#[case("status:lost")]
#[case("status")]
#[case("status: ")]
fn bad_filter_arguments_are_rejected(mut tasks: Page<Task>, #[case] args: &str) {
    assert!(tasks.apply_filter_args(args).is_err());
    assert_eq!(tasks.visible().len(), 6);
}

#[rstest]
fn unknown_key_names_the_valid_ones(mut tasks: Page<Task>) {
    let err = tasks.apply_filter_args("colour:red").unwrap_err();
    match err {
        FilterError::UnknownKey { key, expected } => {
            assert_eq!(key, "colour");
            assert!(expected.contains("priority"));
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[rstest]
fn stats_scope_all_ignores_filters(mut expenses: Page<Expense>, mut ctx: Context) {
    expenses.apply_filter_args("status:rejected").unwrap();
    ctx.stats_scope = StatsScope::Filtered;
    assert_eq!(expenses.summary(&ctx).total, dec!(445.80));
    ctx.stats_scope = StatsScope::All;
    assert_eq!(expenses.summary(&ctx).total, dec!(3014.30));
}

#[rstest]
fn payroll_department_filter_and_totals(ctx: Context) {
    let mut page: Page<PayrollRecord> = Page::new(seed::payroll());
    assert_eq!(page.summary(&ctx).gross, dec!(14864.00));
    page.apply_filter_args("dept:safety").unwrap();
    let visible = page.visible();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].name, "Sarah Wilson");
}
