//! Raw message output.

use std::io::{self, Write};

/// A fully formatted notification email.
#[derive(Debug, Clone, PartialEq)]
pub struct Email {
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl Email {
    /// Writes headers, a blank line and the HTML body.
    ///
    /// Replies go to the recipient as well.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "To: {}", self.to)?;
        writeln!(out, "Reply-To: {}", self.to)?;
        writeln!(out, "Subject: {}", self.subject)?;
        writeln!(out, "Content-Type: text/html")?;
        writeln!(out)?;
        writeln!(out, "{}", self.body)?;
        out.flush()
    }
}
