/// Report formatters
mod plain_text_formatter;

pub use plain_text_formatter::PlainTextFormatter;
