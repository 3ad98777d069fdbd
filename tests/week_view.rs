#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use weekplan::db::items::Items;
    use weekplan::libs::browser::BrowserSession;
    use weekplan::libs::date::Date;
    use weekplan::libs::item::{PlannerItem, Repetition};

    struct WeekTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for WeekTestContext {
        fn setup() -> Self {
            WeekTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    impl WeekTestContext {
        fn db_path(&self) -> PathBuf {
            self.temp_dir.path().join("planner.db")
        }

        fn store(&self) -> Items {
            Items::open(self.db_path()).unwrap()
        }
    }

    #[test_context(WeekTestContext)]
    #[test]
    fn test_epoch_week_renders_with_empty_pre_epoch_days(ctx: &mut WeekTestContext) {
        let mut store = ctx.store();
        let mut item = PlannerItem::new(Date::new(0, 0, 0), "new year 2001", Repetition::None);
        store.save(&mut item).unwrap();

        // Jan 1 2001 is a Monday, so its week reaches back to Dec 31 2000,
        // which predates the epoch and cannot encode. The week must still
        // come back whole, with the pre-epoch day simply empty.
        let mut session = BrowserSession::new(ctx.store(), Date::new(0, 0, 0));
        let days = session.collect_week().unwrap();

        assert_eq!(days.len(), 7);
        assert_eq!(days[0].0.to_string(), "2000-12-31");
        assert!(days[0].1.is_empty());
        assert_eq!(days[1].0.to_string(), "2001-01-01");
        assert_eq!(days[1].1.len(), 1);
        assert_eq!(days[1].1[0].1.description, "new year 2001");
    }

    #[test_context(WeekTestContext)]
    #[test]
    fn test_display_numbers_run_through_the_week(ctx: &mut WeekTestContext) {
        let mut store = ctx.store();

        // Nov 24 2024 is a Sunday; spread items over the week.
        for (day, desc) in [(23, "sunday item"), (25, "tuesday item"), (25, "second tuesday item")] {
            let mut item = PlannerItem::new(Date::new(23, 10, day), desc, Repetition::None);
            store.save(&mut item).unwrap();
        }

        let mut session = BrowserSession::new(ctx.store(), Date::new(23, 10, 28));
        let days = session.collect_week().unwrap();

        assert_eq!(days[0].0.to_string(), "2024-11-24");
        let numbers: Vec<usize> = days
            .iter()
            .flat_map(|(_, items)| items.iter().map(|(number, _)| *number))
            .collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }
}
