//! Field-scoped rules and rule groups

use std::sync::{Arc, OnceLock};

use super::check::Field;
use super::constraint::Constraint;
use super::error::ValidationError;
use crate::error::ParseResult;
use crate::path::{Path, compile};
use crate::traversal::{Outcome, resolve};
use crate::value::Value;

/// A constraint attached to a field path
///
/// The path is compiled on first use and reused afterwards.
#[derive(Debug, Clone)]
pub struct Rule {
    field: String,
    path: OnceLock<ParseResult<Arc<Path>>>,
    constraint: Constraint,
}

impl Rule {
    pub fn new(field: impl Into<String>, constraint: impl Into<Constraint>) -> Self {
        Self {
            field: field.into(),
            path: OnceLock::new(),
            constraint: constraint.into(),
        }
    }

    /// The field path as written
    #[inline]
    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    /// The constraint applied to the field
    #[inline]
    #[must_use]
    pub fn constraint(&self) -> &Constraint {
        &self.constraint
    }

    /// Compiled field path
    ///
    /// # Errors
    /// Returns the parse error when the field path is malformed.
    pub fn path(&self) -> ParseResult<&Path> {
        match self.path.get_or_init(|| compile(&self.field)) {
            Ok(path) => Ok(path.as_ref()),
            Err(err) => Err(err.clone()),
        }
    }

    pub(crate) fn collect_errors(&self, data: &Value, errors: &mut Vec<ValidationError>) {
        let path = match self.path() {
            Ok(path) => path,
            Err(err) => {
                log::warn!("Rule on '{}' has a malformed path: {err}", self.field);
                errors.push(ValidationError::new(
                    Path::verbatim(&self.field),
                    format!("invalid rule path: {err}"),
                ));
                return;
            }
        };

        match resolve(data, path) {
            Outcome::Found(value) => {
                self.constraint
                    .check_field(path, Field::Present(&value), errors);
            }
            Outcome::Missing(_) => self.constraint.check_field(path, Field::Missing, errors),
        }
    }
}

/// How a group combines its members
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GroupMode {
    /// Every member must pass
    #[default]
    All,
    /// At least one member must pass
    Any,
    /// At least this many members must pass
    AtLeast(usize),
}

/// Member of a [`RuleGroup`]
#[derive(Debug, Clone)]
pub enum Member {
    Rule(Rule),
    Group(RuleGroup),
}

impl From<Rule> for Member {
    fn from(rule: Rule) -> Self {
        Member::Rule(rule)
    }
}

impl From<RuleGroup> for Member {
    fn from(group: RuleGroup) -> Self {
        Member::Group(group)
    }
}

impl Member {
    fn collect_errors(&self, data: &Value, errors: &mut Vec<ValidationError>) {
        match self {
            Member::Rule(rule) => rule.collect_errors(data, errors),
            Member::Group(group) => group.collect_errors(data, errors),
        }
    }
}

/// Ordered collection of rules and nested groups
#[derive(Debug, Clone, Default)]
pub struct RuleGroup {
    mode: GroupMode,
    members: Vec<Member>,
}

impl RuleGroup {
    /// Group where every member must pass
    pub fn all<I, M>(members: I) -> Self
    where
        I: IntoIterator<Item = M>,
        M: Into<Member>,
    {
        Self {
            mode: GroupMode::All,
            members: members.into_iter().map(Into::into).collect(),
        }
    }

    /// Group where at least one member must pass
    pub fn any<I, M>(members: I) -> Self
    where
        I: IntoIterator<Item = M>,
        M: Into<Member>,
    {
        Self {
            mode: GroupMode::Any,
            members: members.into_iter().map(Into::into).collect(),
        }
    }

    /// Group where at least `n` members must pass
    ///
    /// When fewer pass, the errors of every failing member are reported.
    pub fn at_least<I, M>(n: usize, members: I) -> Self
    where
        I: IntoIterator<Item = M>,
        M: Into<Member>,
    {
        Self {
            mode: GroupMode::AtLeast(n),
            members: members.into_iter().map(Into::into).collect(),
        }
    }

    /// Append a rule or group
    #[must_use]
    pub fn with(mut self, member: impl Into<Member>) -> Self {
        self.members.push(member.into());
        self
    }

    #[inline]
    #[must_use]
    pub fn mode(&self) -> GroupMode {
        self.mode
    }

    #[inline]
    #[must_use]
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Combine with another member under `mode`, extending in place when the
    /// mode already matches
    pub(crate) fn combine(self, mode: GroupMode, other: Member) -> Self {
        if self.mode == mode {
            self.with(other)
        } else {
            RuleGroup {
                mode,
                members: vec![Member::Group(self), other],
            }
        }
    }

    pub(crate) fn collect_errors(&self, data: &Value, errors: &mut Vec<ValidationError>) {
        match self.mode {
            GroupMode::All => {
                for member in &self.members {
                    member.collect_errors(data, errors);
                }
            }
            GroupMode::Any => {
                let mut collected = Vec::new();
                for member in &self.members {
                    let mut attempt = Vec::new();
                    member.collect_errors(data, &mut attempt);
                    if attempt.is_empty() {
                        return;
                    }
                    collected.extend(attempt);
                }
                errors.extend(collected);
            }
            GroupMode::AtLeast(required) => self.collect_threshold(required, data, errors),
        }
    }

    fn collect_threshold(&self, required: usize, data: &Value, errors: &mut Vec<ValidationError>) {
        let mut passed = 0;
        let mut collected = Vec::new();
        for member in &self.members {
            let mut attempt = Vec::new();
            member.collect_errors(data, &mut attempt);
            if attempt.is_empty() {
                passed += 1;
                if passed >= required {
                    return;
                }
            }
            collected.extend(attempt);
        }
        if passed >= required {
            return;
        }
        if collected.is_empty() {
            collected.push(ValidationError::new(
                Path::root(),
                format!("expected at least {required} passing rules, found {passed}"),
            ));
        }
        errors.extend(collected);
    }
}
