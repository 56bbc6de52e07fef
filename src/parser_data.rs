// ---------------------------------------------------------------------------
// Internal data carried inside CompiledParser<T>
// ---------------------------------------------------------------------------

/// One signature of a browser or OS table: the family it identifies and how
/// to build its version string from the match.
pub(crate) struct SignatureData<F> {
    pub family: F,
    pub version_template: Option<String>,
}
