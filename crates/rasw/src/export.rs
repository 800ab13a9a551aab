//! JSON-lines frame export for external renderers.
//!
//! Every frame becomes one line:
//! `{"frame":0,"t":0.0,"angles":[..degrees..],"positions":[[x,y],..]}`.

use anyhow::{Context, Result};
use rasw_core::Frame;
use serde::Serialize;
use std::io::Write;

/// Most decimals [`FrameRecord::new`] rounds to; larger requests are capped.
pub const MAX_PRECISION: u32 = 15;

/// Wire form of a single animation frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameRecord {
    pub frame: usize,
    pub t: f64,
    /// Joint angles in degrees
    pub angles: Vec<f64>,
    /// Base, joints and end-effector as `[x, y]` pairs
    pub positions: Vec<[f64; 2]>,
}

impl FrameRecord {
    /// Convert a frame, optionally rounding values to `precision` decimals
    pub fn new(frame: &Frame, precision: Option<u32>) -> Self {
        let round = |v: f64| match precision {
            Some(digits) => {
                let scale = 10f64.powi(digits.min(MAX_PRECISION) as i32);
                // `+ 0.0` folds -0.0 into 0.0
                (v * scale).round() / scale + 0.0
            }
            None => v,
        };
        Self {
            frame: frame.index,
            t: frame.t,
            angles: frame.pose.to_degrees().into_iter().map(round).collect(),
            positions: frame
                .positions
                .iter()
                .map(|p| [round(p.x), round(p.y)])
                .collect(),
        }
    }
}

/// Write frames as JSON lines, returning how many were written
pub fn write_frames<W, I>(mut writer: W, frames: I, precision: Option<u32>) -> Result<usize>
where
    W: Write,
    I: IntoIterator<Item = Frame>,
{
    let mut count = 0usize;
    for frame in frames {
        let record = FrameRecord::new(&frame, precision);
        serde_json::to_writer(&mut writer, &record)
            .with_context(|| format!("failed to encode frame {}", frame.index))?;
        writeln!(writer).context("failed to write frame")?;
        count += 1;
    }
    writer.flush().context("failed to flush frames")?;
    Ok(count)
}
