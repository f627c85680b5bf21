mod cadence_tests;
