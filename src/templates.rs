//! Fixed text templates for module skeletons and library registries.
//!
//! Each template only inserts the library and module names; there is no
//! conditional content.

const LICENSE_LINES: &str = "\
----------------------------------------------------------------------------------------------
 Copyright (c) The Einsums Developers. All rights reserved.
 Licensed under the MIT License. See LICENSE.txt in the project root for license information.
----------------------------------------------------------------------------------------------";

/// Notice placed at the top of every registry file
pub const DO_NOT_EDIT: &str = "\
Do not edit this file! It has been generated by the
create-module-skeleton tool.";

/// License banner as CMake comments, followed by a blank line
pub fn cmake_header() -> String {
  let mut out = String::new();
  for line in LICENSE_LINES.lines() {
    out.push_str("# ");
    out.push_str(line);
    out.push('\n');
  }
  out.push('\n');
  out
}

/// License banner as an RST comment block, followed by a blank line
pub fn rst_header() -> String {
  let mut out = String::from("..\n");
  for line in LICENSE_LINES.lines() {
    out.push_str("    ");
    out.push_str(line);
    out.push('\n');
  }
  out.push('\n');
  out
}

fn title(module: &str) -> String {
  let rule = crate::utils::underline(module, '=');
  format!("{rule}\n{module}\n{rule}\n")
}

/// `README.rst` of a module
pub fn module_readme(library: &str, module: &str) -> String {
  format!(
    "{}{}\nThis module is part of the {library} library of einsums.\n",
    rst_header(),
    title(module)
  )
}

/// `docs/index.rst` of a module
pub fn module_docs_index(library: &str, module: &str) -> String {
  format!(
    "{}.. _modules_{module}:\n\n{}\nTODO: High-level description of the {module} module of {library}.\n\n\
     See the :ref:`API reference <modules_{module}_api>` of this module for more\ndetails.\n\n",
    rst_header(),
    title(module)
  )
}

/// Top-level `CMakeLists.txt` of a module
pub fn module_cmakelists(library: &str, module: &str) -> String {
  format!(
    r#"{}list(APPEND CMAKE_MODULE_PATH "${{CMAKE_CURRENT_SOURCE_DIR}}/cmake")

set({module}_headers)

set({module}_sources)

include(einsums_add_module)
einsums_add_module(
    {library} {module}
    GLOBAL_HEADER_GEN ON
    SOURCES ${{{module}_sources}}
    HEADERS ${{{module}_headers}}
    MODULE_DEPENDENCIES
    DEPENDENCIES
    CMAKE_SUBDIRS examples tests
)
"#,
    cmake_header()
  )
}

/// `examples/CMakeLists.txt` of a module
pub fn examples_cmakelists(library: &str, module: &str) -> String {
  format!(
    r#"{}# Examples for the {module} module of {library}.

if(EINSUMS_WITH_EXAMPLES)
    einsums_add_pseudo_target(examples.modules.{module})
    einsums_add_pseudo_dependencies(examples.modules examples.modules.{module})
    if(EINSUMS_WITH_TESTS AND EINSUMS_WITH_TESTS_EXAMPLES)
        einsums_add_pseudo_target(tests.examples.modules.{module})
        einsums_add_pseudo_dependencies(
          tests.examples.modules tests.examples.modules.{module}
        )
    endif()
endif()
"#,
    cmake_header()
  )
}

/// `tests/CMakeLists.txt` of a module
pub fn tests_cmakelists(library: &str, module: &str) -> String {
  format!(
    r#"{}# Tests for the {module} module of {library}.

include(einsums_message)

if(EINSUMS_WITH_TESTS)
    if(EINSUMS_WITH_TESTS_UNIT)
        einsums_add_pseudo_target(tests.unit.modules.{module})
        einsums_add_pseudo_dependencies(
          tests.unit.modules tests.unit.modules.{module}
        )
        add_subdirectory(unit)
    endif()

    if(EINSUMS_WITH_TESTS_REGRESSIONS)
        einsums_add_pseudo_target(tests.regressions.modules.{module})
        einsums_add_pseudo_dependencies(
          tests.regressions.modules tests.regressions.modules.{module}
        )
        add_subdirectory(regressions)
    endif()

    if(EINSUMS_WITH_TESTS_BENCHMARKS)
        einsums_add_pseudo_target(tests.performance.modules.{module})
        einsums_add_pseudo_dependencies(
          tests.performance.modules tests.performance.modules.{module}
        )
        add_subdirectory(performance)
    endif()

    if(EINSUMS_WITH_TESTS_HEADERS)
        einsums_add_header_tests(
          modules.{module}
          HEADERS ${{{module}_headers}}
          HEADER_ROOT ${{PROJECT_SOURCE_DIR}}/include
          DEPENDENCIES einsums_{module}
        )
    endif()
endif()
"#,
    cmake_header()
  )
}

/// `tests/<category>/CMakeLists.txt` of a module
pub fn test_category_cmakelists(library: &str, module: &str, category: &str) -> String {
  format!(
    "{}# {} tests for the {module} module of {library}.\n",
    cmake_header(),
    crate::utils::capitalize(category)
  )
}

/// Title of a library's docs index
pub fn library_title(library: &str) -> String {
  if library == "full" {
    "Main |einsums| modules".to_string()
  } else {
    format!("{} modules", crate::utils::capitalize(library))
  }
}

/// Name of the binary a library's modules are configured into
pub fn library_binary(library: &str) -> String {
  if library == "full" {
    "libeinsums".to_string()
  } else {
    format!("libeinsums_{}", library)
  }
}
