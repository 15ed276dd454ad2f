/// State of an asynchronous read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QueryState<T> {
    Loading,
    Error(String),
    Ready(T),
}

impl<T> QueryState<T> {
    /// Build from the value of a resource: `None` while it is still loading.
    pub fn from_resource<E: std::fmt::Display>(value: Option<Result<T, E>>) -> Self {
        match value {
            None => QueryState::Loading,
            Some(Ok(value)) => QueryState::Ready(value),
            Some(Err(e)) => QueryState::Error(e.to_string()),
        }
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            QueryState::Ready(value) => Some(value),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_resource() {
        let loading: QueryState<u8> = QueryState::from_resource::<String>(None);
        assert_eq!(loading, QueryState::Loading);
        assert_eq!(loading.data(), None);

        let ready = QueryState::from_resource::<String>(Some(Ok(7u8)));
        assert_eq!(ready.data(), Some(&7));

        let failed: QueryState<u8> = QueryState::from_resource(Some(Err("HTTP error: 500")));
        assert_eq!(failed, QueryState::Error("HTTP error: 500".to_string()));
    }
}
