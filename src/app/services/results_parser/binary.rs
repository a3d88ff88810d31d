//! Binary results decoding
//!
//! Layout (all little-endian):
//!
//! | field | type |
//! |---|---|
//! | magic number (516114521) | i32 |
//! | version | i32 |
//! | period count | i32 |
//! | node count | i32 |
//! | link count | i32 |
//! | report start time | f32 |
//! | report step | f32 |
//!
//! followed, for every period, by `node count` blocks of (head, pressure,
//! demand) f32 and then `link count` blocks of (flow, velocity, head loss,
//! status) f32. The file carries no name table, so records get synthetic
//! ids that restart at `Node_0` / `Link_0` each period.

use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::app::models::{BinaryHeader, LinkResult, NodeResult, ResultSource};
use crate::constants::{
    BINARY_HEADER_BYTES, BINARY_MAGIC_NUMBER, SYNTHETIC_LINK_PREFIX, SYNTHETIC_NODE_PREFIX,
};
use crate::{Error, Result, ensure_exists};

/// Records decoded from a binary results file
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryResults {
    pub header: BinaryHeader,

    /// Period-major, node-minor
    pub node_results: Vec<NodeResult>,

    /// Period-major, link-minor
    pub link_results: Vec<LinkResult>,
}

/// Open and decode a binary results file
pub fn read_binary_file(file_path: impl AsRef<Path>) -> Result<BinaryResults> {
    let file_path = file_path.as_ref();
    ensure_exists(file_path)?;
    info!("Reading binary results file: {}", file_path.display());

    let file = File::open(file_path)
        .map_err(|e| Error::io(format!("Failed to open file {}", file_path.display()), e))?;

    read_binary_results(BufReader::new(file), file_path)
}

/// Decode binary results from any reader; `source` names the input in errors
pub fn read_binary_results<R: Read>(reader: R, source: &Path) -> Result<BinaryResults> {
    let mut reader = FieldReader::new(reader, source);
    let header = read_header(&mut reader)?;
    debug_assert_eq!(reader.offset, BINARY_HEADER_BYTES);
    debug!("Binary header: {:?}", header);

    let mut node_results = Vec::new();
    let mut link_results = Vec::new();

    for period in 0..header.period_count {
        let source = ResultSource::Binary { period };

        for i in 0..header.node_count {
            let head = reader.read_f32("node head")?;
            let pressure = reader.read_f32("node pressure")?;
            let demand = reader.read_f32("node demand")?;
            node_results.push(NodeResult {
                id: format!("{}{}", SYNTHETIC_NODE_PREFIX, i),
                elevation: 0.0,
                demand: f64::from(demand),
                head: f64::from(head),
                pressure: f64::from(pressure),
                source,
            });
        }

        for i in 0..header.link_count {
            let flow = reader.read_f32("link flow")?;
            let velocity = reader.read_f32("link velocity")?;
            let head_loss = reader.read_f32("link head loss")?;
            let status = reader.read_f32("link status")?;
            link_results.push(LinkResult {
                id: format!("{}{}", SYNTHETIC_LINK_PREFIX, i),
                flow: f64::from(flow),
                velocity: f64::from(velocity),
                head_loss: f64::from(head_loss),
                status: f64::from(status),
                source,
            });
        }
    }

    info!(
        "Decoded {} periods: {} node results, {} link results",
        header.period_count,
        node_results.len(),
        link_results.len()
    );

    Ok(BinaryResults {
        header,
        node_results,
        link_results,
    })
}

fn read_header<R: Read>(reader: &mut FieldReader<R>) -> Result<BinaryHeader> {
    let magic = reader.read_i32("magic number")?;
    if magic != BINARY_MAGIC_NUMBER {
        return Err(Error::invalid_format(
            &reader.source,
            format!(
                "magic number {} does not match expected {}",
                magic, BINARY_MAGIC_NUMBER
            ),
        ));
    }

    let version = reader.read_i32("version")?;
    let period_count = reader.read_count("period count")?;
    let node_count = reader.read_count("node count")?;
    let link_count = reader.read_count("link count")?;
    let report_start_time = reader.read_f32("report start time")?;
    let report_step = reader.read_f32("report step")?;

    Ok(BinaryHeader {
        magic,
        version,
        period_count,
        node_count,
        link_count,
        report_start_time,
        report_step,
    })
}

/// Little-endian field reader that tracks its byte offset
struct FieldReader<R> {
    inner: R,
    offset: u64,
    source: PathBuf,
}

impl<R: Read> FieldReader<R> {
    fn new(inner: R, source: &Path) -> Self {
        Self {
            inner,
            offset: 0,
            source: source.to_path_buf(),
        }
    }

    fn read_word(&mut self, field: &str) -> Result<[u8; 4]> {
        let mut buf = [0u8; 4];
        match self.inner.read_exact(&mut buf) {
            Ok(()) => {
                self.offset += 4;
                Ok(buf)
            }
            Err(e) if e.kind() == ErrorKind::UnexpectedEof => {
                Err(Error::truncated_file(&self.source, self.offset, field))
            }
            Err(e) => Err(Error::io(
                format!("Failed to read {} from {}", field, self.source.display()),
                e,
            )),
        }
    }

    fn read_i32(&mut self, field: &str) -> Result<i32> {
        self.read_word(field).map(i32::from_le_bytes)
    }

    fn read_f32(&mut self, field: &str) -> Result<f32> {
        self.read_word(field).map(f32::from_le_bytes)
    }

    /// Header counts are stored signed; negative values are rejected
    fn read_count(&mut self, field: &str) -> Result<usize> {
        let value = self.read_i32(field)?;
        usize::try_from(value).map_err(|_| {
            Error::invalid_format(&self.source, format!("negative {}: {}", field, value))
        })
    }
}
