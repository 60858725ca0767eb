pub mod certificate;
pub mod docx;
pub mod dto;
pub mod handler;
pub mod service;

pub use dto::{BackupRequest, DownloadDocRequest, ExportFormat, LogEntry};
pub use service::ExportService;
