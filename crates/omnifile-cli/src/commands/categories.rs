//! Categories command implementation.

use crate::error::Result;
use crate::output::Formatter;

/// Execute the categories command.
pub fn execute_categories(formatter: &Formatter) -> Result<()> {
    println!("{}", formatter.format_categories()?);
    Ok(())
}
