mod alignment_tests;
