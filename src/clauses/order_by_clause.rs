use crate::environment::Environment;
use crate::errors::BuildResult;
use crate::expressions::Expr;
use crate::to_cypher::ToCypher;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Order {
    #[default]
    Asc,
    Desc,
}

impl Order {
    pub fn keyword(&self) -> &'static str {
        match self {
            Order::Asc => "ASC",
            Order::Desc => "DESC",
        }
    }
}

/// `ORDER BY`, `SKIP` and `LIMIT` of a projection
#[derive(Debug, Clone, Default)]
pub struct OrderByClause {
    items: Vec<(Expr, Order)>,
    skip: Option<Expr>,
    limit: Option<Expr>,
}

impl OrderByClause {
    pub fn push(&mut self, expr: Expr, order: Order) {
        self.items.push((expr, order));
    }

    pub fn set_skip(&mut self, skip: Expr) {
        self.skip = Some(skip);
    }

    pub fn set_limit(&mut self, limit: Expr) {
        self.limit = Some(limit);
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty() && self.skip.is_none() && self.limit.is_none()
    }

    /// One line per present part, in `ORDER BY`, `SKIP`, `LIMIT` order
    pub(crate) fn compile(&self, env: &mut Environment) -> BuildResult<Vec<String>> {
        let mut lines = Vec::new();
        if !self.items.is_empty() {
            let items = self
                .items
                .iter()
                .map(|(expr, order)| Ok(format!("{} {}", expr.to_cypher(env)?, order.keyword())))
                .collect::<BuildResult<Vec<_>>>()?;
            lines.push(format!("ORDER BY {}", items.join(", ")));
        }
        if let Some(skip) = &self.skip {
            lines.push(format!("SKIP {}", skip.to_cypher(env)?));
        }
        if let Some(limit) = &self.limit {
            lines.push(format!("LIMIT {}", limit.to_cypher(env)?));
        }
        Ok(lines)
    }
}
