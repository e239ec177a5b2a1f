/*! # guarani-corpus

Guarani word extraction from web pages and corpus assembly.

Text chunks of a page are classified by a vote between a statistical model ([fasttext](https://fasttext.cc)),
a generic language detector and Guarani lexical rules ([identifiers]).
Words of accepted chunks, or words that are Guarani on their own, are then written
in per-page files with per-domain metadata ([io]).

The [pipelines::CorpusPipeline] wires everything from a seed list ([sources]).
!*/
pub mod error;
pub mod extract;
pub mod filtering;
pub mod identifiers;
pub mod io;
pub mod lang;
pub mod pipelines;
pub mod sources;
