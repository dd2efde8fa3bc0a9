//! Record I/O
//!
//! File readers that turn input files into cast tables, query pairs and edge
//! lists, and writers that serialize results.

mod output;
mod records;

pub use output::{
    write_components, write_connections, write_paths, OutputFormat, PathRecord,
    CONNECTIONS_HEADER, NOT_CONNECTED, PATH_HEADER,
};
pub use records::{
    read_cast, read_cast_file, read_edge_list, read_edge_list_file, read_pairs, read_pairs_file,
    ActorPair,
};
