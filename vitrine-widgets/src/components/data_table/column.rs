//! Column configuration and cell projection types.

use std::cmp::Ordering;
use std::fmt;

use crate::types::Color;
use crate::types::TextStyle;

/// A typed value projected out of a row for sorting and display.
///
/// Accessors return `Option<CellValue>`; `None` stands for an absent
/// field and always sorts after every present value.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl CellValue {
    /// Total ordering used by column sorting. Values of the same kind use
    /// their natural order; numbers compare across Int/Float; any other
    /// mixed-kind pair falls back to comparing display text.
    pub fn compare(&self, other: &CellValue) -> Ordering {
        use CellValue::*;
        match (self, other) {
            (Text(a), Text(b)) => a.cmp(b),
            (Int(a), Int(b)) => a.cmp(b),
            (Float(a), Float(b)) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
            (Int(a), Float(b)) => (*a as f64).partial_cmp(b).unwrap_or(Ordering::Equal),
            (Float(a), Int(b)) => a.partial_cmp(&(*b as f64)).unwrap_or(Ordering::Equal),
            (Bool(a), Bool(b)) => a.cmp(b),
            (a, b) => a.to_string().cmp(&b.to_string()),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => f.write_str(s),
            CellValue::Int(n) => write!(f, "{n}"),
            CellValue::Float(n) => write!(f, "{n}"),
            CellValue::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        CellValue::Int(n)
    }
}

impl From<u32> for CellValue {
    fn from(n: u32) -> Self {
        CellValue::Int(n as i64)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Float(n)
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Bool(b)
    }
}

/// Horizontal alignment for column content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Styled cell text produced by a column renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct CellContent {
    pub text: String,
    pub fg: Option<Color>,
    pub style: TextStyle,
}

impl CellContent {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            fg: None,
            style: TextStyle::new(),
        }
    }

    pub fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    pub fn bold(mut self) -> Self {
        self.style = self.style.bold();
        self
    }

    pub fn dim(mut self) -> Self {
        self.style = self.style.dim();
        self
    }
}

impl From<&str> for CellContent {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for CellContent {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

type Accessor<T> = Box<dyn Fn(&T) -> Option<CellValue> + Send + Sync>;
type CellRenderer<T> = Box<dyn Fn(Option<&CellValue>, &T, usize) -> CellContent + Send + Sync>;

/// Column configuration.
///
/// Columns define the structure of the table: a unique key, header text,
/// width, alignment, whether the column is sortable, the accessor that
/// projects a cell value out of a row, and an optional renderer that
/// overrides the default stringified display.
///
/// # Examples
///
/// ```ignore
/// let columns = vec![
///     Column::new("id", "ID", 6, |u: &User| Some(u.id.into())).sortable(),
///     Column::new("name", "Name", 20, |u: &User| Some(u.name.as_str().into())),
///     Column::new("status", "Status", 10, |u: &User| Some(u.status.to_string().into()))
///         .renderer(|value, _row, _index| {
///             CellContent::new(value.map(ToString::to_string).unwrap_or_default())
///         }),
/// ];
/// ```
pub struct Column<T> {
    /// Unique key identifying this column within the table.
    pub key: String,
    /// Column header text.
    pub title: String,
    /// Column width in terminal columns (fixed).
    pub width: u16,
    /// Horizontal alignment.
    pub align: Alignment,
    /// Whether this column is sortable.
    pub sortable: bool,
    accessor: Accessor<T>,
    renderer: Option<CellRenderer<T>>,
}

impl<T> Column<T> {
    /// Create a new column with explicit width.
    ///
    /// The accessor must be a pure projection of the row; it is invoked
    /// once per row on every sort recomputation.
    pub fn new(
        key: impl Into<String>,
        title: impl Into<String>,
        width: u16,
        accessor: impl Fn(&T) -> Option<CellValue> + Send + Sync + 'static,
    ) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            width,
            align: Alignment::Left,
            sortable: false,
            accessor: Box::new(accessor),
            renderer: None,
        }
    }

    /// Make the column sortable.
    ///
    /// Sortable columns show a sort indicator in the header and respond
    /// to header clicks by cycling the table's sort state.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Set the column alignment.
    pub fn align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    /// Override cell display with a custom renderer.
    ///
    /// The renderer receives the accessor value, the row, and the row's
    /// position in the current view.
    pub fn renderer(
        mut self,
        renderer: impl Fn(Option<&CellValue>, &T, usize) -> CellContent + Send + Sync + 'static,
    ) -> Self {
        self.renderer = Some(Box::new(renderer));
        self
    }

    /// Project the sortable cell value out of a row.
    pub fn value(&self, row: &T) -> Option<CellValue> {
        (self.accessor)(row)
    }

    /// Cell display content: the custom renderer if present, otherwise
    /// the stringified accessor value (empty for an absent value).
    pub fn cell_content(&self, row: &T, index: usize) -> CellContent {
        let value = self.value(row);
        match &self.renderer {
            Some(renderer) => renderer(value.as_ref(), row, index),
            None => CellContent::new(value.map(|v| v.to_string()).unwrap_or_default()),
        }
    }
}

impl<T> fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("title", &self.title)
            .field("width", &self.width)
            .field("align", &self.align)
            .field("sortable", &self.sortable)
            .field("renderer", &self.renderer.is_some())
            .finish()
    }
}
