mod tests {
    use embassy_futures::block_on;
    use pov_wand_engine::mailbox::{SwingMailbox, decode, encode};
    use pov_wand_engine::{Direction, SwingEvent};

    #[test]
    fn test_packed_word_round_trips() {
        let swing = SwingEvent {
            direction: Direction::Forward,
            duration_us: 123_456,
        };
        assert_eq!(decode(encode(swing)), swing);

        let zero = SwingEvent {
            direction: Direction::Reverse,
            duration_us: 0,
        };
        assert_eq!(decode(encode(zero)), zero);
    }

    #[test]
    fn test_longest_duration_keeps_direction_intact() {
        for direction in [Direction::Forward, Direction::Reverse] {
            let swing = SwingEvent {
                direction,
                duration_us: (1 << 31) - 1,
            };
            assert_eq!(decode(encode(swing)), swing);
        }
    }

    #[test]
    fn test_receive_observes_only_the_latest_send() {
        let mailbox = SwingMailbox::new();
        for duration_us in 1..=5 {
            mailbox.send(SwingEvent {
                direction: Direction::Forward,
                duration_us,
            });
        }

        let received = mailbox.try_receive().expect("a value is pending");
        assert_eq!(received.duration_us, 5);

        // consumed: nothing further until the next send
        assert_eq!(mailbox.try_receive(), None);
    }

    #[test]
    fn test_blocking_receive_returns_published_swing() {
        let mailbox = SwingMailbox::new();
        let swing = SwingEvent {
            direction: Direction::Reverse,
            duration_us: 42,
        };
        mailbox.send(swing);
        assert_eq!(block_on(mailbox.receive()), swing);
    }
}
