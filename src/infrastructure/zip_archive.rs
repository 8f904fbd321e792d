//! 压缩包协作方 - 基础设施层
//!
//! 按插入顺序写入条目，条目名原样保留

use std::collections::HashSet;
use std::io::{Cursor, Seek, Write};

use tracing::warn;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::config::Compression;
use crate::error::ArchiveError;

/// 压缩包构建器
pub trait ArchiveWriter: Send + 'static {
    /// 追加一个条目
    fn add_entry(&mut self, name: &str, bytes: &[u8]) -> Result<(), ArchiveError>;

    /// 完成打包，返回压缩包内容
    fn finalize(self) -> Result<Vec<u8>, ArchiveError>
    where
        Self: Sized;
}

/// 内存中的 ZIP 构建器
///
/// 同名条目会被拒绝，而不是静默覆盖
pub struct ZipArchiveWriter {
    writer: ZipWriter<Cursor<Vec<u8>>>,
    options: SimpleFileOptions,
    names: HashSet<String>,
}

impl ZipArchiveWriter {
    pub fn new(compression: Compression) -> Self {
        let method = match compression {
            Compression::Deflate => CompressionMethod::Deflated,
            Compression::Store => CompressionMethod::Stored,
        };

        Self {
            writer: ZipWriter::new(Cursor::new(Vec::new())),
            options: SimpleFileOptions::default().compression_method(method),
            names: HashSet::new(),
        }
    }

    /// 已写入的条目数量
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for ZipArchiveWriter {
    fn default() -> Self {
        Self::new(Compression::Deflate)
    }
}

impl ArchiveWriter for ZipArchiveWriter {
    fn add_entry(&mut self, name: &str, bytes: &[u8]) -> Result<(), ArchiveError> {
        if self.names.contains(name) {
            return Err(ArchiveError::DuplicateEntry(name.to_string()));
        }

        write_entry(&mut self.writer, self.options, name, bytes)?;

        self.names.insert(name.to_string());
        Ok(())
    }

    fn finalize(self) -> Result<Vec<u8>, ArchiveError> {
        let cursor = self.writer.finish()?;
        Ok(cursor.into_inner())
    }
}

/// 写入一个完整条目
///
/// 写入内容失败时撤销这个条目，压缩包中不会留下半截数据
fn write_entry<W: Write + Seek>(
    writer: &mut ZipWriter<W>,
    options: SimpleFileOptions,
    name: &str,
    bytes: &[u8],
) -> Result<(), ArchiveError> {
    // 超过 4GB 的条目需要 ZIP64，否则 zip 会自行撤销条目
    let options = options.large_file(bytes.len() as u64 >= u64::from(u32::MAX));
    writer.start_file(name, options)?;

    if let Err(source) = writer.write_all(bytes) {
        if let Err(e) = writer.abort_file() {
            warn!("⚠️ 撤销压缩包条目 {} 失败: {}", name, e);
        }
        return Err(ArchiveError::WriteFailed {
            name: name.to_string(),
            source,
        });
    }

    Ok(())
}
