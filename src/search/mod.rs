//! Token matching of questions against universe entities.
//!
//! Every entity is scored by how many distinct question tokens appear in its
//! normalized token set (whole-token containment, no field weighting). Within
//! each category, results are ordered by descending score with ties kept in
//! declaration order.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::model::Universe;
use crate::sanitize::Limits;
use crate::text;

/// Ranked matches for one question, per entity category.
///
/// Transient: produced fresh per query, and self-contained enough to render
/// a result line without re-consulting the universe.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Matches {
    pub objects: Vec<ObjectMatch>,
    pub classes: Vec<ClassMatch>,
    pub tables: Vec<TableMatch>,
    pub joins: Vec<JoinMatch>,
}

impl Matches {
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
            && self.classes.is_empty()
            && self.tables.is_empty()
            && self.joins.is_empty()
    }
}

/// A business object that matched, with its owning class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectMatch {
    pub name: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sql: Option<String>,
    pub class: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassMatch {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableMatch {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JoinMatch {
    pub name: String,
    pub from: String,
    pub to: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expression: Option<String>,
}

/// Match a question against every entity of a sanitized universe.
///
/// An empty question (no tokens after normalization) yields empty matches,
/// never a match-everything result.
pub fn search(universe: &Universe, question: &str, limits: &Limits) -> Matches {
    let tokens = question_tokens(question, limits);
    if tokens.is_empty() {
        return Matches::default();
    }

    let mut objects = Vec::new();
    for class in &universe.classes {
        for object in &class.objects {
            let entity = text::token_set(
                [
                    Some(object.name.as_str()),
                    object.kind.as_deref(),
                    object.description.as_deref(),
                    object.sql.as_deref(),
                ]
                .into_iter()
                .flatten(),
            );
            let score = overlap(&tokens, &entity);
            if score > 0 {
                objects.push((
                    score,
                    ObjectMatch {
                        name: object.name.clone(),
                        kind: object.kind.clone(),
                        description: object.description.clone(),
                        sql: object.sql.clone(),
                        class: class.name.clone(),
                    },
                ));
            }
        }
    }

    let mut classes = Vec::new();
    for class in &universe.classes {
        let entity = text::token_set(
            [Some(class.name.as_str()), class.description.as_deref()]
                .into_iter()
                .flatten(),
        );
        let score = overlap(&tokens, &entity);
        if score > 0 {
            classes.push((
                score,
                ClassMatch {
                    name: class.name.clone(),
                    description: class.description.clone(),
                },
            ));
        }
    }

    let mut tables = Vec::new();
    for table in &universe.tables {
        let entity = text::token_set(
            [Some(table.name.as_str()), table.description.as_deref()]
                .into_iter()
                .flatten(),
        );
        let score = overlap(&tokens, &entity);
        if score > 0 {
            tables.push((
                score,
                TableMatch {
                    name: table.name.clone(),
                    description: table.description.clone(),
                },
            ));
        }
    }

    let mut joins = Vec::new();
    for join in &universe.joins {
        // A join matches on its own fields even when from/to reference
        // tables that do not exist in the universe.
        let entity = text::token_set(
            [
                Some(join.name.as_str()),
                join.expression.as_deref(),
                Some(join.from.as_str()),
                Some(join.to.as_str()),
            ]
            .into_iter()
            .flatten(),
        );
        let score = overlap(&tokens, &entity);
        if score > 0 {
            joins.push((
                score,
                JoinMatch {
                    name: join.name.clone(),
                    from: join.from.clone(),
                    to: join.to.clone(),
                    expression: join.expression.clone(),
                },
            ));
        }
    }

    Matches {
        objects: ranked(objects),
        classes: ranked(classes),
        tables: ranked(tables),
        joins: ranked(joins),
    }
}

/// Distinct question tokens, capped at `limits.max_question_tokens`.
fn question_tokens(question: &str, limits: &Limits) -> Vec<String> {
    let mut seen = HashSet::new();
    text::normalize(question)
        .into_iter()
        .filter(|token| seen.insert(token.clone()))
        .take(limits.max_question_tokens)
        .collect()
}

fn overlap(question: &[String], entity: &HashSet<String>) -> usize {
    question.iter().filter(|token| entity.contains(*token)).count()
}

/// Order by descending score. The sort is stable, so ties keep the
/// declaration order of the universe document.
fn ranked<T>(mut scored: Vec<(usize, T)>) -> Vec<T> {
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.into_iter().map(|(_, item)| item).collect()
}
