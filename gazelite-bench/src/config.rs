// Copyright (c) 2025 Pratik Barhate
// Licensed under the MIT License. See the LICENSE file in the project root for more information.

pub(crate) mod benchmark_config;

pub(crate) use benchmark_config::*;
