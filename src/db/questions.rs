// src/db/questions.rs

use sqlx::AnyPool;

use super::{Backend, StoreError, StoreResult};
use crate::{models::question::Question, utils::pagination::Page};

const QUESTION_COLUMNS: &str = "id, question, answer, category, difficulty";

/// Fields of a question about to be inserted.
#[derive(Debug, Clone, Copy)]
pub struct NewQuestion<'a> {
    pub question: &'a str,
    pub answer: &'a str,
    pub category: i64,
    pub difficulty: i64,
}

/// One page of an id-ordered listing together with the size of the full listing.
#[derive(Debug)]
pub struct QuestionPage {
    pub questions: Vec<Question>,
    pub total: i64,
}

pub async fn count(pool: &AnyPool) -> StoreResult<i64> {
    let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM questions")
        .fetch_one(pool)
        .await?;

    Ok(total)
}

pub async fn list_page(pool: &AnyPool, page: Page) -> StoreResult<QuestionPage> {
    let total = count(pool).await?;

    let questions = sqlx::query_as::<_, Question>(&format!(
        "SELECT {QUESTION_COLUMNS} FROM questions ORDER BY id LIMIT $1 OFFSET $2"
    ))
    .bind(page.limit())
    .bind(page.offset())
    .fetch_all(pool)
    .await?;

    Ok(QuestionPage { questions, total })
}

pub async fn list_page_in_category(
    pool: &AnyPool,
    category_id: i64,
    page: Page,
) -> StoreResult<QuestionPage> {
    let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM questions WHERE category = $1")
        .bind(category_id)
        .fetch_one(pool)
        .await?;

    let questions = sqlx::query_as::<_, Question>(&format!(
        "SELECT {QUESTION_COLUMNS} FROM questions WHERE category = $1 ORDER BY id LIMIT $2 OFFSET $3"
    ))
    .bind(category_id)
    .bind(page.limit())
    .bind(page.offset())
    .fetch_all(pool)
    .await?;

    Ok(QuestionPage { questions, total })
}

/// Case-insensitive substring search over the question text, ordered by id.
///
/// SQLite's `LOWER`/`LIKE` only fold ASCII, so on SQLite the id-ordered rows
/// are matched with Unicode lowercasing before the page window is applied.
pub async fn search_page(
    pool: &AnyPool,
    backend: Backend,
    term: &str,
    page: Page,
) -> StoreResult<QuestionPage> {
    match backend {
        Backend::Postgres => search_page_ilike(pool, term, page).await,
        Backend::Sqlite => {
            let needle = term.to_lowercase();
            let matches: Vec<Question> = list_all(pool, None)
                .await?
                .into_iter()
                .filter(|q| q.question.to_lowercase().contains(&needle))
                .collect();

            let total = matches.len() as i64;
            Ok(QuestionPage {
                questions: page.slice(matches),
                total,
            })
        }
    }
}

async fn search_page_ilike(pool: &AnyPool, term: &str, page: Page) -> StoreResult<QuestionPage> {
    let pattern = like_pattern(term);

    let total: i64 = sqlx::query_scalar(
        r"SELECT COUNT(*) FROM questions WHERE question ILIKE $1 ESCAPE '\'",
    )
    .bind(pattern.as_str())
    .fetch_one(pool)
    .await?;

    let questions = sqlx::query_as::<_, Question>(&format!(
        r"SELECT {QUESTION_COLUMNS} FROM questions WHERE question ILIKE $1 ESCAPE '\' ORDER BY id LIMIT $2 OFFSET $3"
    ))
    .bind(pattern.as_str())
    .bind(page.limit())
    .bind(page.offset())
    .fetch_all(pool)
    .await?;

    Ok(QuestionPage { questions, total })
}

/// Every question, or every question of one category, ordered by id.
pub async fn list_all(pool: &AnyPool, category_id: Option<i64>) -> StoreResult<Vec<Question>> {
    let questions = match category_id {
        Some(id) => {
            sqlx::query_as::<_, Question>(&format!(
                "SELECT {QUESTION_COLUMNS} FROM questions WHERE category = $1 ORDER BY id"
            ))
            .bind(id)
            .fetch_all(pool)
            .await?
        }
        None => {
            sqlx::query_as::<_, Question>(&format!(
                "SELECT {QUESTION_COLUMNS} FROM questions ORDER BY id"
            ))
            .fetch_all(pool)
            .await?
        }
    };

    Ok(questions)
}

/// Inserts a question after checking that its category exists.
pub async fn create(pool: &AnyPool, new: NewQuestion<'_>) -> StoreResult<Question> {
    let mut tx = pool.begin().await?;

    let category: Option<i64> = sqlx::query_scalar("SELECT id FROM categories WHERE id = $1")
        .bind(new.category)
        .fetch_optional(&mut *tx)
        .await?;

    if category.is_none() {
        return Err(StoreError::UnknownCategory(new.category));
    }

    let question = sqlx::query_as::<_, Question>(&format!(
        "INSERT INTO questions (question, answer, category, difficulty) \
         VALUES ($1, $2, $3, $4) \
         RETURNING {QUESTION_COLUMNS}"
    ))
    .bind(new.question)
    .bind(new.answer)
    .bind(new.category)
    .bind(new.difficulty)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok(question)
}

pub async fn delete(pool: &AnyPool, id: i64) -> StoreResult<()> {
    let mut tx = pool.begin().await?;

    let existing: Option<i64> = sqlx::query_scalar("SELECT id FROM questions WHERE id = $1")
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;

    if existing.is_none() {
        return Err(StoreError::NotFound {
            entity: "question",
            id,
        });
    }

    sqlx::query("DELETE FROM questions WHERE id = $1")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(())
}

/// `%term%` with LIKE wildcards in `term` escaped by `\`.
fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[cfg(test)]
mod tests {
    use super::like_pattern;

    #[test]
    fn like_pattern_wraps_term() {
        assert_eq!(like_pattern("Title"), "%Title%");
    }

    #[test]
    fn like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("100%"), r"%100\%%");
        assert_eq!(like_pattern("snake_case"), r"%snake\_case%");
        assert_eq!(like_pattern(r"a\b"), r"%a\\b%");
    }
}
