// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod admin_test;
pub mod auth_test;
pub mod health_check;
pub mod helpers;
pub mod moderation_test;
pub mod profile_test;
pub mod program_test;
pub mod rating_test;
