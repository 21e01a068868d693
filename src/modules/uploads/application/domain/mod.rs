pub mod storage_path;
