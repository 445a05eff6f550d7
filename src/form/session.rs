//! Interactive form on a line-oriented terminal.
//!
//! Each field is prompted in schema order with its current value as the
//! default. A blank answer keeps the default, an invalid answer is explained
//! and asked again, and `q` or end of input abandons the form. Answers carry
//! over to the next submission, the way form widgets keep their state.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use super::record::CustomerRecord;
use super::schema::{FieldKind, FieldSpec, FORM_FIELDS};
use crate::errors::FormError;

const QUIT_WORDS: &[&str] = &["q", "quit", "exit"];

pub struct FormSession<R, W> {
    reader: R,
    writer: W,
    current: CustomerRecord,
}

impl<R, W> FormSession<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            current: CustomerRecord::default(),
        }
    }

    /// The values the next form will start from.
    pub fn current(&self) -> &CustomerRecord {
        &self.current
    }

    /// Prompt for a full record. `Ok(None)` means the user quit.
    pub async fn collect(&mut self) -> Result<Option<CustomerRecord>, FormError> {
        let mut record = self.current.clone();
        self.write("\nEnter customer data (blank keeps the default, 'q' quits)\n")
            .await?;

        let mut section = None;
        for spec in FORM_FIELDS {
            if section != Some(spec.section) {
                section = Some(spec.section);
                self.write(&format!("\n== {} ==\n", spec.section.title()))
                    .await?;
            }

            if !self.ask_field(spec, &mut record).await? {
                return Ok(None);
            }
        }

        self.current = record.clone();
        Ok(Some(record))
    }

    /// Ask one field until it gets a valid answer. Returns `false` on quit.
    async fn ask_field(
        &mut self,
        spec: &FieldSpec,
        record: &mut CustomerRecord,
    ) -> Result<bool, FormError> {
        loop {
            let prompt = prompt_for(spec, record);
            self.write(&prompt).await?;

            let answer = match self.read_answer().await? {
                Some(answer) => answer,
                None => return Ok(false),
            };
            if QUIT_WORDS.contains(&answer.to_ascii_lowercase().as_str()) {
                return Ok(false);
            }
            if answer.is_empty() {
                return Ok(true);
            }

            match record.set(spec, &answer) {
                Ok(()) => return Ok(true),
                Err(e) => self.write(&format!("  ! {}\n", e)).await?,
            }
        }
    }

    async fn read_answer(&mut self) -> Result<Option<String>, FormError> {
        let mut line = String::new();
        let read = self
            .reader
            .read_line(&mut line)
            .await
            .map_err(FormError::Terminal)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    async fn write(&mut self, text: &str) -> Result<(), FormError> {
        self.writer
            .write_all(text.as_bytes())
            .await
            .map_err(FormError::Terminal)?;
        self.writer.flush().await.map_err(FormError::Terminal)
    }
}

fn prompt_for(spec: &FieldSpec, record: &CustomerRecord) -> String {
    let default = record.display_value(spec);
    match spec.kind {
        FieldKind::Choice { choices, .. } => {
            let options: Vec<String> = choices
                .iter()
                .enumerate()
                .map(|(i, choice)| format!("{}) {}", i + 1, choice))
                .collect();
            format!("{} [{}] ({}): ", spec.label, options.join(", "), default)
        }
        FieldKind::Flag { .. } => format!("{} [No/Yes] ({}): ", spec.label, default),
        FieldKind::Integer { min, max, .. } => {
            format!("{} [{}-{}] ({}): ", spec.label, min, max, default)
        }
        FieldKind::Amount { .. } => format!("{} ({}): ", spec.label, default),
    }
}
