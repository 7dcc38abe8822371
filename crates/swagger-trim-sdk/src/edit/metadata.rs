use crate::documents::SwaggerDocument;
use crate::transform::DocumentMetadata;

pub fn apply_metadata(document: &mut SwaggerDocument, metadata: &DocumentMetadata) {
    document.info.title = metadata.title.clone();
    document.info.version = metadata.version.clone();
}
