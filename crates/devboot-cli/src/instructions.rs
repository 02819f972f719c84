//! Post-install instructions

use devboot_env::Platform;

const TOOL_USAGE_INSTRUCTIONS: &str = "
You use 'tox' to run tasks that set up and manage the development environment,
run tests, linters, and build documentation:

Examples:

  tox run -e lint     # Run linters on the codebase
  tox run -e docs     # Build documentation
  tox run -e py310    # Run the test suite using Python 3.10
  tox run -e py314    # Run the test suite using Python 3.14
  tox devenv -e dev   # Start an interactive dev environment with Python 3.12

The list of available 'tox' environments can be found by running:

  tox list

If you are not familiar with using 'tox' see https://tox.wiki/en/latest/

You use 'uv' to manage Python packages within the virtual environment and to
update pyproject dependencies:

Examples:

  # Add a new package to the 'dev' dependency group
  uv add --dev --group=dev 'package_name>=1.2.3'

  # Add a new package to the default dependency group
  uv add 'package_name>=1.2.3'

  # Add a package to specified extras
  uv add 'package_name[extra1,extra2]'

  # install a package from PyPI to the virtual environment
  uv pip install 'package_name>=1.2.3'

See https://docs.astral.sh/uv/ for more information on using 'uv'.
";

const POST_INSTALL_TEMPLATE: &str = "
--- Bootstrap complete! ---

To activate the development environment, run:

  {activate}

To deactivate the virtual environment, run:

  deactivate

{usage}
";

/// Shell command that activates `.venv` on `platform`.
pub fn activation_command(platform: Platform) -> &'static str {
    match platform {
        Platform::Posix => "source .venv/bin/activate",
        Platform::Windows => ".venv\\Scripts\\activate.bat",
    }
}

/// The full message printed once bootstrapping succeeded.
pub fn render_instructions(platform: Platform) -> String {
    POST_INSTALL_TEMPLATE
        .replace("{activate}", activation_command(platform))
        .replace("{usage}", TOOL_USAGE_INSTRUCTIONS)
}
