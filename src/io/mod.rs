/*!
# IO utilities

Corpus saving: per-page word files and per-domain metadata.
!*/
mod corpusfiles;
pub mod metadata;
pub mod naming;

pub use corpusfiles::CorpusAssembler;
pub use metadata::{DomainMetadata, DomainMetadataEntry};
