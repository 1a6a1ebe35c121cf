use sea_orm::{
    EntityTrait, Order, QueryFilter, QueryOrder, QuerySelect, Select,
    sea_query::{Alias, Expr, Func, LikeExpr, SimpleExpr},
};
use serde::Deserialize;

use crate::entities::movie;

/// Raw `GET /movies` query string.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ListParams {
    pub genre: Option<String>,
    pub sort: Option<String>,
    pub order: Option<String>,
    pub limit: Option<i64>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SortKey {
    ReleaseDate,
    Popularity,
    Title,
}

impl SortKey {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "RELEASE_DATE" => Some(SortKey::ReleaseDate),
            "POPULARITY" => Some(SortKey::Popularity),
            "TITLE" => Some(SortKey::Title),
            _ => None,
        }
    }

    /// Ordering expression: dates compare as calendar values, popularity as a number.
    fn expr(self) -> SimpleExpr {
        match self {
            SortKey::ReleaseDate => {
                Func::cust(Alias::new("date")).arg(Expr::col(movie::Column::ReleaseDate)).into()
            }
            SortKey::Popularity => {
                Func::cast_as(Expr::col(movie::Column::Popularity), Alias::new("REAL")).into()
            }
            SortKey::Title => Expr::col(movie::Column::Title).into(),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "ASC" => Some(SortOrder::Asc),
            "DESC" => Some(SortOrder::Desc),
            _ => None,
        }
    }

    fn as_order(self) -> Order {
        match self {
            SortOrder::Asc => Order::Asc,
            SortOrder::Desc => Order::Desc,
        }
    }
}

/// Normalised list query. Unknown sort keys or directions drop the sort
/// entirely; a non-positive limit means no limit.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct MovieQuery {
    pub genre: Option<String>,
    pub sort: Option<(SortKey, SortOrder)>,
    pub limit: Option<u64>,
}

impl From<ListParams> for MovieQuery {
    fn from(params: ListParams) -> Self {
        let genre = params.genre.filter(|g| !g.is_empty());
        let order = SortOrder::parse(params.order.as_deref().unwrap_or("ASC"));
        let sort = params.sort.as_deref().and_then(SortKey::parse).zip(order);
        let limit = params.limit.filter(|n| *n > 0).map(|n| n as u64);
        Self { genre, sort, limit }
    }
}

impl MovieQuery {
    /// Projection used by the list endpoint. Column aliases match `MovieSummary`.
    pub fn select(&self) -> Select<movie::Entity> {
        let mut select = movie::Entity::find()
            .select_only()
            .column_as(movie::Column::Title, "title")
            .column_as(movie::Column::Id, "id")
            .column_as(movie::Column::ReleaseDate, "release_date")
            .column_as(movie::Column::Popularity, "popularity")
            .column_as(movie::Column::Genre, "genre");

        if let Some(genre) = &self.genre {
            // SQLite's LOWER only folds ASCII, so fold the pattern the same way.
            let pattern = format!("%{}%", escape_like(&genre.to_ascii_lowercase()));
            select = select.filter(
                Expr::expr(Func::lower(Expr::col(movie::Column::Genre)))
                    .like(LikeExpr::new(pattern).escape(LIKE_ESCAPE)),
            );
        }

        if let Some((key, order)) = self.sort {
            select = select.order_by(key.expr(), order.as_order());
        }

        select.limit(self.limit)
    }
}

const LIKE_ESCAPE: char = '!';

fn escape_like(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            out.push(LIKE_ESCAPE);
        }
        out.push(c);
    }
    out
}
