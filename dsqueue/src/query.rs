use derive_more::Display;
use serde::Serialize;
use uuid::Uuid;

/// Identity of the `Client` that created a query.
/// Two clients never share an identity even if they talk to the same datastore.
#[derive(Serialize, Clone, Copy, PartialEq, Eq, Hash, Debug, Display)]
pub struct ClientId(Uuid);

impl ClientId {
    pub(crate) fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

#[derive(Serialize, Clone, Copy, PartialEq, Eq, Debug, Display)]
pub enum FilterOp {
    #[display("=")]
    Eq,
    #[display("<")]
    Lt,
    #[display("<=")]
    Le,
    #[display(">")]
    Gt,
    #[display(">=")]
    Ge,
}

#[derive(Serialize, Clone, Copy, PartialEq, Eq, Debug, Display)]
pub enum Direction {
    #[display("asc")]
    Ascending,
    #[display("desc")]
    Descending,
}

#[derive(Serialize, Clone, PartialEq, Eq, Debug, Display)]
#[display("{property} {op} {value}")]
pub struct Filter {
    pub property: String,
    pub op: FilterOp,
    pub value: String,
}

#[derive(Serialize, Clone, PartialEq, Eq, Debug, Display)]
#[display("{property} {direction}")]
pub struct Order {
    pub property: String,
    pub direction: Direction,
}

/// Handle of a query to be run against the datastore.
///
/// A `Query` can only be created by `Client::create_query` or
/// `Client::create_query_in` and remembers which client created it.
/// Queries are refined by the builder methods before they are buffered.
#[derive(Serialize, Clone, PartialEq, Eq, Debug)]
pub struct Query {
    origin: ClientId,
    namespace: Option<String>,
    kind: String,
    filters: Vec<Filter>,
    orders: Vec<Order>,
    limit: Option<u32>,
    offset: Option<u32>,
}

impl Query {
    pub(crate) fn new(origin: ClientId, namespace: Option<String>, kind: String) -> Self {
        Self {
            origin,
            namespace,
            kind,
            filters: vec![],
            orders: vec![],
            limit: None,
            offset: None,
        }
    }

    pub fn filter(
        mut self,
        property: impl Into<String>,
        op: FilterOp,
        value: impl Into<String>,
    ) -> Self {
        self.filters.push(Filter {
            property: property.into(),
            op,
            value: value.into(),
        });
        self
    }

    pub fn order(mut self, property: impl Into<String>, direction: Direction) -> Self {
        self.orders.push(Order {
            property: property.into(),
            direction,
        });
        self
    }

    pub fn limit(self, n: u32) -> Self {
        Self {
            limit: Some(n),
            ..self
        }
    }

    pub fn offset(self, n: u32) -> Self {
        Self {
            offset: Some(n),
            ..self
        }
    }

    pub fn origin(&self) -> ClientId {
        self.origin
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn limit_value(&self) -> Option<u32> {
        self.limit
    }

    pub fn offset_value(&self) -> Option<u32> {
        self.offset
    }
}
