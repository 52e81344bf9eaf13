// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 可见范围到查询条件的转换

use crate::domain::services::visibility::VisibilityScope;
use crate::infrastructure::database::entities::{profile, program};
use sea_orm::sea_query::{Query, SelectStatement};
use sea_orm::{ColumnTrait, Condition};

/// 档案表上的可见条件
pub(crate) fn profile_condition(scope: VisibilityScope) -> Condition {
    match scope {
        VisibilityScope::ApprovedOnly => Condition::all().add(profile::Column::IsApproved.eq(true)),
        VisibilityScope::ApprovedOrOwnedBy(user_id) => Condition::any()
            .add(profile::Column::IsApproved.eq(true))
            .add(profile::Column::UserId.eq(user_id)),
        VisibilityScope::Everything => Condition::all(),
    }
}

/// 项目表上的可见条件，项目归其档案的所有者所有
pub(crate) fn program_condition(scope: VisibilityScope) -> Condition {
    match scope {
        VisibilityScope::ApprovedOnly => Condition::all().add(program::Column::IsApproved.eq(true)),
        VisibilityScope::ApprovedOrOwnedBy(user_id) => Condition::any()
            .add(program::Column::IsApproved.eq(true))
            .add(
                program::Column::ProfileId.in_subquery(profile_ids(
                    Condition::all().add(profile::Column::UserId.eq(user_id)),
                )),
            ),
        VisibilityScope::Everything => Condition::all(),
    }
}

/// 挂在档案下的记录（社交链接、评分）：档案可见时才可见
pub(crate) fn child_of_profile_condition<C: ColumnTrait>(
    profile_column: C,
    scope: VisibilityScope,
) -> Condition {
    match scope {
        VisibilityScope::Everything => Condition::all(),
        _ => Condition::all()
            .add(profile_column.in_subquery(profile_ids(profile_condition(scope)))),
    }
}

fn profile_ids(condition: Condition) -> SelectStatement {
    Query::select()
        .column(profile::Column::Id)
        .from(profile::Entity)
        .cond_where(condition)
        .to_owned()
}
