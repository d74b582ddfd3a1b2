//! Query filters for the REST surface
//!
//! Builds the `column=operator.value` pairs the backend understands
//! (`eq`, `is.null`, `in.(..)`, `ilike`, `or=(..)`, `order`).

/// Filter and ordering parameters for one request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    params: Vec<(String, String)>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    /// `select=<columns>`
    pub fn select(mut self, columns: &str) -> Self {
        self.params.push(("select".into(), columns.into()));
        self
    }

    /// `column=eq.value`
    pub fn eq(mut self, column: &str, value: impl ToString) -> Self {
        self.params.push((column.into(), format!("eq.{}", value.to_string())));
        self
    }

    /// `column=gte.value`
    pub fn gte(mut self, column: &str, value: impl ToString) -> Self {
        self.params.push((column.into(), format!("gte.{}", value.to_string())));
        self
    }

    /// `column=is.null`
    pub fn is_null(mut self, column: &str) -> Self {
        self.params.push((column.into(), "is.null".into()));
        self
    }

    /// `column=in.(a,b,c)`
    pub fn in_list<I, V>(mut self, column: &str, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: ToString,
    {
        let joined = values
            .into_iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(",");
        self.params.push((column.into(), format!("in.({})", joined)));
        self
    }

    /// Case-insensitive substring match on any of `columns`
    pub fn search(mut self, columns: &[&str], term: &str) -> Self {
        // Reserved characters inside or=(..) would split the expression
        let term: String = term
            .chars()
            .filter(|c| !matches!(c, ',' | '(' | ')' | '*'))
            .collect();
        let clauses = columns
            .iter()
            .map(|c| format!("{}.ilike.*{}*", c, term.trim()))
            .collect::<Vec<_>>()
            .join(",");
        self.params.push(("or".into(), format!("({})", clauses)));
        self
    }

    /// `order=<columns>`, e.g. `fecha.asc,hora.asc`
    pub fn order(mut self, columns: &str) -> Self {
        self.params.push(("order".into(), columns.into()));
        self
    }

    /// `limit=n`
    pub fn limit(mut self, n: usize) -> Self {
        self.params.push(("limit".into(), n.to_string()));
        self
    }

    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(f: &Filter) -> Vec<(&str, &str)> {
        f.params()
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect()
    }

    #[test]
    fn test_unassigned_reservation_filter() {
        let f = Filter::new()
            .is_null("mesa_id")
            .in_list("estado", ["pendiente", "confirmada"])
            .order("fecha.asc,hora.asc");
        assert_eq!(
            pairs(&f),
            vec![
                ("mesa_id", "is.null"),
                ("estado", "in.(pendiente,confirmada)"),
                ("order", "fecha.asc,hora.asc"),
            ]
        );
    }

    #[test]
    fn test_search_strips_reserved_characters() {
        let f = Filter::new().search(&["nombre", "telefono"], " ana,(x) ");
        assert_eq!(
            pairs(&f),
            vec![("or", "(nombre.ilike.*anax*,telefono.ilike.*anax*)")]
        );
    }
}
