use colored::Color;
use fineasy::cli::format::{Formatter, LocaleStyle};
use fineasy::cli::output::{set_preferences, OutputPreferences};

#[test]
fn color_can_be_switched_off_and_on_again() {
    // Must run before anything in this process asks `colored` about the terminal.
    std::env::set_var("CLICOLOR_FORCE", "1");
    let fmt = Formatter::new(LocaleStyle::Brazilian, "BRL", true);

    set_preferences(OutputPreferences { color: false });
    assert_eq!(fmt.paint("x", Color::Red), "x");

    set_preferences(OutputPreferences { color: true });
    assert!(fmt.paint("x", Color::Red).contains("\u{1b}["));
}
