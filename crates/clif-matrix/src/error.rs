//! Matrix-level errors.

/// Errors raised by the matrix primitives.
#[derive(Debug, thiserror::Error)]
pub enum MatrixError {
    #[error("{op}: incompatible shapes {lhs_rows}x{lhs_cols} and {rhs_rows}x{rhs_cols}")]
    Dimension {
        op: &'static str,
        lhs_rows: usize,
        lhs_cols: usize,
        rhs_rows: usize,
        rhs_cols: usize,
    },

    #[error("nork: left operand has no non-zero entries")]
    DegenerateInput,
}
