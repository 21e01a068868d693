mod upload_media;

pub use upload_media::{UploadMediaCommand, UploadMediaError, UploadMediaUseCase, UploadedMedia};
