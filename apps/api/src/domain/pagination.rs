use std::fmt;
use std::str::FromStr;

/// Items per page when the client does not ask for a size
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Upper bound on items per page
pub const MAX_PAGE_SIZE: u32 = 2000;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(Direction::Asc),
            "desc" => Ok(Direction::Desc),
            other => Err(format!("Invalid sort direction: {}", other)),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Asc => write!(f, "ASC"),
            Direction::Desc => write!(f, "DESC"),
        }
    }
}

/// JobOffer properties a listing can be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortProperty {
    Id,
    Title,
    Location,
    Description,
}

impl SortProperty {
    /// Column backing the property in the `job_offer` table
    pub fn column(&self) -> &'static str {
        match self {
            SortProperty::Id => "id",
            SortProperty::Title => "title",
            SortProperty::Location => "location",
            SortProperty::Description => "description",
        }
    }
}

impl FromStr for SortProperty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(SortProperty::Id),
            "title" => Ok(SortProperty::Title),
            "location" => Ok(SortProperty::Location),
            "description" => Ok(SortProperty::Description),
            other => Err(format!("Unknown sort property: {}", other)),
        }
    }
}

/// Ordering of a listing
///
/// Parsed from `property[,direction]`, e.g. `title,desc`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort {
    pub property: SortProperty,
    pub direction: Direction,
}

impl Sort {
    pub fn new(property: SortProperty, direction: Direction) -> Self {
        Self {
            property,
            direction,
        }
    }
}

impl FromStr for Sort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(',').map(str::trim);

        let property = parts
            .next()
            .filter(|p| !p.is_empty())
            .ok_or_else(|| "Sort property cannot be empty".to_string())?
            .parse()?;

        let direction = match parts.next() {
            Some(d) if !d.is_empty() => d.parse()?,
            _ => Direction::Asc,
        };

        if parts.next().is_some() {
            return Err(format!("Invalid sort expression: {}", s));
        }

        Ok(Self::new(property, direction))
    }
}

/// Requested slice of a listing
///
/// Pages are 0-indexed. A size of 0 means `DEFAULT_PAGE_SIZE`, larger sizes
/// are capped at `MAX_PAGE_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    size: u32,
    sort: Option<Sort>,
}

impl PageRequest {
    pub fn new(page: u32, size: u32) -> Self {
        Self {
            page,
            size: match size {
                0 => DEFAULT_PAGE_SIZE,
                size => size.min(MAX_PAGE_SIZE),
            },
            sort: None,
        }
    }

    pub fn with_sort(mut self, sort: Sort) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn sort(&self) -> Option<&Sort> {
        self.sort.as_ref()
    }

    /// Number of items preceding the requested page
    pub fn offset(&self) -> u64 {
        u64::from(self.page) * u64::from(self.size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(0, DEFAULT_PAGE_SIZE)
    }
}

/// One page of a listing plus the size of the whole result set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    content: Vec<T>,
    number: u32,
    size: u32,
    total_elements: u64,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, request: &PageRequest, total_elements: u64) -> Self {
        Self {
            content,
            number: request.page(),
            size: request.size(),
            total_elements,
        }
    }

    pub fn content(&self) -> &[T] {
        &self.content
    }

    pub fn into_content(self) -> Vec<T> {
        self.content
    }

    /// 0-based index of this page
    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn total_elements(&self) -> u64 {
        self.total_elements
    }

    /// Number of pages in the whole result set, 0 when it is empty
    pub fn total_pages(&self) -> u64 {
        if self.size == 0 {
            return 1;
        }
        self.total_elements.div_ceil(u64::from(self.size))
    }

    pub fn has_next(&self) -> bool {
        u64::from(self.number) + 1 < self.total_pages()
    }

    pub fn has_previous(&self) -> bool {
        self.number > 0
    }
}
