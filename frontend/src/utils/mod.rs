pub mod dialog;
pub mod download;
pub mod file;
pub mod focus;
pub mod format;
pub mod navigation;
pub mod storage;
