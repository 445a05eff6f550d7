use tokio::io::{AsyncBufRead, AsyncWrite, AsyncWriteExt};

use super::{render, Dashboard};
use crate::config::OutputFormat;
use crate::errors::SessionError;
use crate::form::FormSession;
use crate::pipeline::ChurnPipeline;

/// Collect records and write a report for each until the form is abandoned.
///
/// Reports go to `out`; the form prompts through its own writer. The empty
/// dashboard shown before the first submission is only written as text.
pub async fn run_interactive<R, P, O>(
    session: &mut FormSession<R, P>,
    pipeline: &ChurnPipeline<'_>,
    dashboard: &Dashboard,
    format: OutputFormat,
    out: &mut O,
) -> Result<(), SessionError>
where
    R: AsyncBufRead + Unpin,
    P: AsyncWrite + Unpin,
    O: AsyncWrite + Unpin,
{
    if format == OutputFormat::Text {
        let pending = dashboard.report(pipeline, None);
        write_report(out, &render(&pending, format)?).await?;
    }

    while let Some(record) = session.collect().await? {
        let result = pipeline.predict(&record);
        let report = dashboard.report(pipeline, Some(&result));
        write_report(out, &render(&report, format)?).await?;
    }
    Ok(())
}

async fn write_report<O>(out: &mut O, rendered: &str) -> std::io::Result<()>
where
    O: AsyncWrite + Unpin,
{
    out.write_all(rendered.as_bytes()).await?;
    out.write_all(b"\n").await?;
    out.flush().await
}
