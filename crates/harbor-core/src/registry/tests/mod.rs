mod command_tests;
mod variable_tests;
