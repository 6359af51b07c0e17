// Constants for the object graph walker

/// Member-name fragments hidden unless a member is whitelisted by exact name.
/// These cover backing-field markers and the length/count/buffer internals of
/// generic containers.
pub const DEFAULT_BLACKLIST: &[&str] = &[
    "__", "_marker", "_phantom", "_buf", "_len", "_count", "_version", "capacity",
];

/// Nesting ceiling applied when a config does not override it.
/// Each hop costs several native stack frames (the visit, the wrapper
/// forwarding and the shape callback), so this must fit a 2 MB thread stack
/// in an unoptimized build.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Marker rendered for absent values
pub const NULL_MARKER: &str = "(∅)";

/// Tool name written into the document header
pub const TOOL_NAME: &str = concat!(env!("CARGO_PKG_NAME"), " ", env!("CARGO_PKG_VERSION"));

/// Prefix of every node identifier in the emitted document
pub const NODE_PREFIX: &str = "struct";

/// File extension of written documents
pub const DOCUMENT_EXTENSION: &str = "dot";
