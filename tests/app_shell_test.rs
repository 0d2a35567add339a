use chrono::NaiveDate;
use ratatui::{backend::TestBackend, Terminal};

use expenses::config::Settings;
use expenses::models::{Expense, Money};
use expenses::storage::Storage;
use expenses::tui::{views, App};

fn render(app: &App) -> Vec<String> {
    let backend = TestBackend::new(100, 24);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|frame| views::render(frame, app)).unwrap();

    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect())
        .collect()
}

#[test]
fn app_mounts() {
    let storage = Storage::new();
    let settings = Settings::default();
    let app = App::new(&storage, &settings);

    let lines = render(&app);
    assert_eq!(lines.len(), 24);
    assert!(lines.iter().any(|l| !l.trim().is_empty()));
}

#[test]
fn empty_list_renders_empty_message() {
    let storage = Storage::new();
    let settings = Settings::default();
    let app = App::new(&storage, &settings);

    let lines = render(&app);
    assert!(lines.iter().any(|l| l.contains("Нет расходов")));
}

#[test]
fn one_row_per_expense_in_insertion_order() {
    let date = NaiveDate::from_ymd_opt(2025, 12, 28).unwrap();
    let titles = ["Юбка", "Обед", "Такси", "Кофе"];
    let storage = Storage::with_expenses(
        titles
            .iter()
            .enumerate()
            .map(|(i, t)| Expense::new(*t, Money::from_minor(10000 * (i as i64 + 1)), date)),
    )
    .unwrap();
    let settings = Settings::default();
    let app = App::with_today(&storage, &settings, date);

    let lines = render(&app);
    let rows: Vec<usize> = titles
        .iter()
        .map(|t| lines.iter().position(|l| l.contains(t)).unwrap())
        .collect();

    for pair in rows.windows(2) {
        assert_eq!(pair[1], pair[0] + 1);
    }
    assert_eq!(lines.iter().filter(|l| l.contains("2025-12-28")).count(), titles.len());
    assert!(!lines.iter().any(|l| l.contains("Нет расходов")));
}
