mod my_character_view;
mod my_habits_view;
mod my_progress_view;
mod my_stat_history_view;
