//! Recipient list parsing and the shared entry field.
//!
//! Recipients are free-form strings (phone numbers, no format validation).
//! Both entry modes write to one [`RecipientSource`]: manual edits store
//! the field text verbatim, file imports replace it with the comma-joined
//! canonical form. The list handed to the dispatch backend is derived at
//! send time by splitting the current text on commas.

/// Which entry mode last wrote the shared recipient field.
///
/// Manual typing and file import are alternative tabs over a single
/// underlying value; the tag records where that value came from so the
/// overwrite-on-import behavior is explicit rather than two independent
/// bindings racing on one variable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Provenance {
    /// Typed (or edited) directly into the text field.
    #[default]
    Manual,
    /// Replaced wholesale by a file import.
    Imported,
}

/// The shared recipient entry field: raw text plus its provenance.
///
/// Holds whatever the user last produced -- verbatim typed text or the
/// canonical comma-joined form of an import. The canonical recipient list
/// is derived on demand via [`recipients`](Self::recipients).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipientSource {
    raw: String,
    provenance: Provenance,
}

impl RecipientSource {
    /// Store manually entered text verbatim.
    ///
    /// Any text is accepted, including empty. Editing after an import
    /// returns provenance to [`Provenance::Manual`].
    pub fn edit(&mut self, raw: impl Into<String>) {
        self.raw = raw.into();
        self.provenance = Provenance::Manual;
    }

    /// Replace the field with the canonical form of imported file content.
    ///
    /// `content` is split on newlines or commas, each token trimmed and
    /// empty tokens discarded, then rejoined with `", "`. The previous
    /// field value is overwritten regardless of which mode produced it.
    /// Binary or malformed content degrades to garbage tokens; nothing is
    /// rejected here.
    pub fn import(&mut self, content: &str) {
        self.raw = canonical_join(&delimited_tokens(content));
        self.provenance = Provenance::Imported;
    }

    /// The current field text, exactly as stored.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Which entry mode last wrote the field.
    #[must_use]
    pub const fn provenance(&self) -> Provenance {
        self.provenance
    }

    /// Derive the recipient list from the current field text.
    ///
    /// Splits on commas only. Imported content has already been normalized
    /// to comma-joined form by [`import`](Self::import), so this derivation
    /// is lossless over its own canonical output. Newlines inside manually
    /// entered text stay embedded in their tokens.
    ///
    /// ```
    /// use volley_compose::RecipientSource;
    ///
    /// let mut source = RecipientSource::default();
    /// source.edit("111, 222,, 333 ");
    /// assert_eq!(source.recipients(), ["111", "222", "333"]);
    /// ```
    #[must_use]
    pub fn recipients(&self) -> Vec<String> {
        comma_tokens(&self.raw)
    }

    /// Whether the derived recipient list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recipients().is_empty()
    }
}

/// Split `text` on commas, trim each token, and drop empty tokens.
///
/// This is the send-time derivation as well as the manual-entry parse.
#[must_use]
pub fn comma_tokens(text: &str) -> Vec<String> {
    tokens_split_by(text, |c| c == ',')
}

/// Split `text` on newlines or commas, trim each token, and drop empty
/// tokens.
///
/// Used for file imports; handles newline-separated, comma-separated, and
/// mixed files alike. Runs of delimiters collapse because the empty tokens
/// between them are discarded, and trimming removes the `\r` left by CRLF
/// line endings.
#[must_use]
pub fn delimited_tokens(text: &str) -> Vec<String> {
    tokens_split_by(text, |c| c == '\n' || c == ',')
}

/// Join tokens into the canonical comma-separated field representation.
#[must_use]
pub fn canonical_join(tokens: &[String]) -> String {
    tokens.join(", ")
}

fn tokens_split_by(text: &str, is_delimiter: impl Fn(char) -> bool) -> Vec<String> {
    text.split(is_delimiter)
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_owned)
        .collect()
}
