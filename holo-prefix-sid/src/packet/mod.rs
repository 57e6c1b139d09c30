//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

pub mod consts;
pub mod cursor;
pub mod error;
pub mod prefix_sid;
pub mod tree;
