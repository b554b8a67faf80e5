use crate::domain::commands::assets::{UploadAssetCommand, UploadAssetResult};
use crate::domain::models::AssetKind as DomainAssetKind;
use shared::{AssetKind as SharedAssetKind, UploadAssetResponse};

pub struct AssetMapper;

impl AssetMapper {
    pub fn kind_to_domain(kind: SharedAssetKind) -> DomainAssetKind {
        match kind {
            SharedAssetKind::Thumbnail => DomainAssetKind::Thumbnail,
            SharedAssetKind::Document => DomainAssetKind::Document,
        }
    }

    pub fn to_upload_command(kind: SharedAssetKind, file_name: String, bytes: Vec<u8>) -> UploadAssetCommand {
        UploadAssetCommand {
            kind: Self::kind_to_domain(kind),
            file_name,
            bytes,
        }
    }

    pub fn to_upload_response(result: UploadAssetResult) -> UploadAssetResponse {
        UploadAssetResponse {
            location: result.location,
            stored_remotely: result.stored_remotely,
        }
    }
}
