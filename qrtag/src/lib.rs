// This file is part of the product QR Tracker.
// SPDX-FileCopyrightText: 2026 QR Tracker contributors
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

pub mod app_state;
pub mod config;
pub mod headers;
pub mod public;
pub mod tags;
pub mod templates;
pub mod util;
