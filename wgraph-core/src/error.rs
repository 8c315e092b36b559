//! Error types for the weighted graph library.
//!
//! Every failure the graph reports is an invalid-argument failure raised
//! before any state changes. Self-loop insertions and erasing an absent edge
//! are not errors; they surface through boolean return values instead.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Invalid-argument failures reported by [`crate::WeightedGraph`] and
/// [`crate::GraphBuilder`].
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GraphError {
    /// A vertex index fell outside `0..vertex_count`.
    #[error("vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    VertexOutOfRange {
        /// The offending vertex index.
        vertex: usize,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
    /// An edge weight was negative or NaN.
    #[error("edge weight {weight} must be non-negative")]
    InvalidWeight {
        /// The rejected weight.
        weight: f64,
    },
    /// The graph was constructed with zero vertices.
    #[error("a graph needs at least one vertex")]
    EmptyGraph,
    /// The point index for this many vertices cannot be allocated.
    #[error("cannot allocate edge storage for {vertex_count} vertices")]
    TooManyVertices {
        /// The requested vertex count.
        vertex_count: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// A vertex index fell outside the graph.
        VertexOutOfRange => VertexOutOfRange { .. } => "GRAPH_VERTEX_OUT_OF_RANGE",
        /// An edge weight was negative or NaN.
        InvalidWeight => InvalidWeight { .. } => "GRAPH_INVALID_WEIGHT",
        /// The graph was constructed with zero vertices.
        EmptyGraph => EmptyGraph => "GRAPH_EMPTY",
        /// Edge storage for the requested vertex count cannot be allocated.
        TooManyVertices => TooManyVertices { .. } => "GRAPH_TOO_MANY_VERTICES",
    }
}

/// Convenient alias for results returned by the graph API.
pub type Result<T> = core::result::Result<T, GraphError>;
