//! `&` and `|` composition

use std::ops::{BitAnd, BitOr};

use super::checks::{
    Equals, InRange, InSet, IsOptional, IsRequired, IsType, Matches, MaxCount, MinCount, NotRequired,
    Predicate,
};
use super::constraint::Constraint;
use super::rules::{GroupMode, Member, Rule, RuleGroup};

macro_rules! constraint_ops {
    ($($ty:ty),* $(,)?) => {
        $(
            impl<R: Into<Constraint>> BitAnd<R> for $ty {
                type Output = Constraint;

                fn bitand(self, rhs: R) -> Constraint {
                    Constraint::from(self).and(rhs.into())
                }
            }

            impl<R: Into<Constraint>> BitOr<R> for $ty {
                type Output = Constraint;

                fn bitor(self, rhs: R) -> Constraint {
                    Constraint::from(self).or(rhs.into())
                }
            }
        )*
    };
}

constraint_ops!(
    Constraint, IsRequired, IsOptional, NotRequired, IsType, InRange, InSet, MinCount, MaxCount, Equals,
    Matches, Predicate,
);

impl<M: Into<Member>> BitAnd<M> for Rule {
    type Output = RuleGroup;

    fn bitand(self, rhs: M) -> RuleGroup {
        RuleGroup::all([Member::Rule(self), rhs.into()])
    }
}

impl<M: Into<Member>> BitOr<M> for Rule {
    type Output = RuleGroup;

    fn bitor(self, rhs: M) -> RuleGroup {
        RuleGroup::any([Member::Rule(self), rhs.into()])
    }
}

impl<M: Into<Member>> BitAnd<M> for RuleGroup {
    type Output = RuleGroup;

    fn bitand(self, rhs: M) -> RuleGroup {
        self.combine(GroupMode::All, rhs.into())
    }
}

impl<M: Into<Member>> BitOr<M> for RuleGroup {
    type Output = RuleGroup;

    fn bitor(self, rhs: M) -> RuleGroup {
        self.combine(GroupMode::Any, rhs.into())
    }
}
