mod tests {
    use neopixel_strip::BusyFlag;

    #[test]
    fn test_busy_flag_latches() {
        let flag = BusyFlag::new();
        assert!(!flag.is_set());

        flag.set();
        assert!(flag.is_set());

        flag.clear();
        assert!(!flag.is_set());
    }

    #[test]
    fn test_busy_flag_shareable_as_static() {
        static FLAG: BusyFlag = BusyFlag::new();
        FLAG.set();
        assert!(FLAG.is_set());
        FLAG.clear();
    }
}
