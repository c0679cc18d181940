//! Terminal surface. Cards are printed fully expanded.

use std::io::Write;

use crate::hints::types::error::Result;
use crate::hints::types::models::{DisplayCard, MessageKind};
use super::surface::Surface;

pub struct TextSurface<W: Write> {
    out: W,
}

impl<W: Write> TextSurface<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Surface for TextSurface<W> {
    fn clear(&mut self) -> Result<()> {
        writeln!(self.out)?;
        Ok(())
    }

    fn append_card(&mut self, card: &DisplayCard) -> Result<()> {
        writeln!(self.out, "▸ {} [{}]", card.title, card.badge)?;
        for section in &card.hints {
            writeln!(self.out, "    {}", section.label)?;
            write_body(&mut self.out, &section.body)?;
        }
        if let Some(answer) = &card.answer {
            writeln!(self.out, "    {}", answer.label)?;
            match &answer.prefix {
                Some(prefix) => write_body(&mut self.out, &format!("{} {}", prefix, answer.body))?,
                None => write_body(&mut self.out, &answer.body)?,
            }
        }
        self.out.flush()?;
        Ok(())
    }

    fn show_message(&mut self, kind: MessageKind, text: &str) -> Result<()> {
        match kind {
            MessageKind::LoadFailed => writeln!(self.out, "!! {}", text)?,
            MessageKind::Empty => writeln!(self.out, "-- {}", text)?,
        }
        self.out.flush()?;
        Ok(())
    }

    fn notify(&mut self, text: &str) -> Result<()> {
        writeln!(self.out, "*** {} ***", text)?;
        self.out.flush()?;
        Ok(())
    }
}

fn write_body(out: &mut impl Write, body: &str) -> std::io::Result<()> {
    for line in body.lines() {
        writeln!(out, "        {}", line)?;
    }
    Ok(())
}
