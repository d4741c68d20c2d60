//! Column descriptors and cell resolution

use serde_json::{Map, Value};

use super::filter::js_string;

/// Visual tone of a badge cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BadgeTone {
    Success,
    Warning,
    Danger,
    Info,
    Neutral,
}

/// A rendered cell: text plus an optional badge tone
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub text: String,
    pub tone: Option<BadgeTone>,
}

impl Cell {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: None,
        }
    }

    pub fn badge(text: impl Into<String>, tone: BadgeTone) -> Self {
        Self {
            text: text.into(),
            tone: Some(tone),
        }
    }
}

/// How a column reads its value from a row
pub enum Accessor<T> {
    /// Key into the row's serialized fields; a missing key renders empty
    Field(&'static str),
    /// Computed from the row
    Derive(fn(&T) -> String),
}

impl<T> Clone for Accessor<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Field(key) => Self::Field(key),
            Self::Derive(f) => Self::Derive(*f),
        }
    }
}

impl<T> std::fmt::Debug for Accessor<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Field(key) => f.debug_tuple("Field").field(key).finish(),
            Self::Derive(_) => f.write_str("Derive(..)"),
        }
    }
}

/// Column descriptor: header, accessor and optional custom renderer
pub struct Column<T> {
    pub header: String,
    pub accessor: Accessor<T>,
    pub render: Option<fn(&T) -> Cell>,
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            header: self.header.clone(),
            accessor: self.accessor.clone(),
            render: self.render,
        }
    }
}

impl<T> Column<T> {
    pub fn field(header: impl Into<String>, key: &'static str) -> Self {
        Self {
            header: header.into(),
            accessor: Accessor::Field(key),
            render: None,
        }
    }

    pub fn derive(header: impl Into<String>, f: fn(&T) -> String) -> Self {
        Self {
            header: header.into(),
            accessor: Accessor::Derive(f),
            render: None,
        }
    }

    pub fn with_render(mut self, render: fn(&T) -> Cell) -> Self {
        self.render = Some(render);
        self
    }

    /// Resolve the cell for `row`.
    ///
    /// Order: custom renderer, then derive accessor, then field key.
    pub fn cell(&self, row: &T, fields: &Map<String, Value>) -> Cell {
        if let Some(render) = self.render {
            return render(row);
        }
        match &self.accessor {
            Accessor::Derive(f) => Cell::text(f(row)),
            Accessor::Field(key) => Cell::text(fields.get(*key).map(js_string).unwrap_or_default()),
        }
    }
}
