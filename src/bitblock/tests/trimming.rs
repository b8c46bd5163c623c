use bitblock::{BitBlock, Error};

const PATTERN: &str = "010010111100110001101010110111110010100110001001111000110010101000101010101010011100011110010101011100000111001101101011001000110000010";

fn assert_padding(block: &BitBlock) {
    let bytes = block.view();
    assert_eq!(bytes.len(), block.size().div_ceil(8));

    let rem = block.size() % 8;
    if rem != 0 {
        let last = bytes[bytes.len() - 1];
        assert_eq!(last >> rem, 0, "padding bits set in {last:#010b}");
    }
}

fn pattern() -> BitBlock {
    PATTERN.parse().unwrap()
}

#[test]
fn sub_blocks_match_source() -> Result<(), Error> {
    let block = pattern();

    for l in 0..=block.size() {
        for r in (l..=block.size()).step_by(3).chain([block.size()]) {
            let sub = block.sub_block(l, r)?;

            assert_eq!(sub.size(), r - l);
            assert_eq!(sub.to_binary_string(), &PATTERN[l..r]);
            for i in 0..sub.size() {
                assert_eq!(sub.get(i)?, block.get(l + i)?);
            }
            assert_padding(&sub);
        }
    }

    Ok(())
}

#[test]
fn empty_sub_block() -> Result<(), Error> {
    let block = pattern();

    let sub = block.sub_block(5, 5)?;
    assert!(sub.is_empty());
    assert!(sub.view().is_empty());

    assert!(block.sub_block(135, 135)?.is_empty());

    Ok(())
}

#[test]
fn invalid_ranges() {
    let block = pattern();

    assert_eq!(
        block.sub_block(3, 2),
        Err(Error::InvalidRange { l: 3, r: 2, size: 135 })
    );
    assert_eq!(
        block.sub_block(100, 136),
        Err(Error::InvalidRange {
            l: 100,
            r: 136,
            size: 135
        })
    );
    assert!(block.sub_block(136, 136).is_err());
}

#[test]
fn range_error_messages() {
    let block = BitBlock::zeroed(10);

    assert_eq!(
        block.sub_block(13, 8).unwrap_err().to_string(),
        "invalid range [13:8] for BitBlock, start of range [13] is greater than end of range [8]"
    );
    assert_eq!(
        block.sub_block(8, 13).unwrap_err().to_string(),
        "invalid range [8:13] for BitBlock with size 10"
    );
}

#[test]
fn sub_block_is_independent() -> Result<(), Error> {
    let mut block = pattern();
    let mut sub = block.sub_block(10, 30)?;

    let before = block.get(10)?;
    sub.set(0, !before)?;
    assert_eq!(block.get(10)?, before);

    block.set(11, !block.get(11)?)?;
    assert_eq!(sub.get(1)?, !block.get(11)?);

    Ok(())
}

#[test]
fn remove_first_bits() -> Result<(), Error> {
    let block = pattern();

    for k in 0..=block.size() {
        let trimmed = block.remove_first_bits(k)?;

        assert_eq!(trimmed.size(), block.size() - k);
        assert_eq!(trimmed.to_binary_string(), &PATTERN[k..]);
        for i in 0..trimmed.size() {
            assert_eq!(trimmed.get(i)?, block.get(k + i)?);
        }
        assert_padding(&trimmed);
    }

    Ok(())
}

#[test]
fn remove_last_bits() -> Result<(), Error> {
    let block = pattern();

    for k in 0..=block.size() {
        let trimmed = block.remove_last_bits(k)?;

        assert_eq!(trimmed.size(), block.size() - k);
        assert_eq!(trimmed.to_binary_string(), &PATTERN[..block.size() - k]);
        assert_padding(&trimmed);
    }

    Ok(())
}

#[test]
fn remove_bits_across_byte_boundaries() -> Result<(), Error> {
    let block = BitBlock::from_bytes(&[0xF0, 0x0F, 0xAA], 24);

    assert_eq!(block.remove_first_bits(4)?.view(), &[0xFF, 0xA0, 0x0A]);
    assert_eq!(block.remove_first_bits(8)?.view(), &[0x0F, 0xAA]);
    assert_eq!(block.remove_first_bits(12)?.view(), &[0xA0, 0x0A]);
    assert_eq!(block.remove_last_bits(4)?.view(), &[0xF0, 0x0F, 0x0A]);
    assert_eq!(block.remove_last_bits(20)?.view(), &[0x00]);

    Ok(())
}

#[test]
fn trimmed_blocks_are_independent() -> Result<(), Error> {
    let mut block = pattern();
    let mut head = block.remove_last_bits(100)?;
    let mut tail = block.remove_first_bits(100)?;

    head.set(0, true)?;
    tail.set(0, true)?;
    assert!(!block.get(0)?);
    assert!(!block.get(100)?);

    block.set(1, false)?;
    assert!(head.get(1)?);

    Ok(())
}

#[test]
fn invalid_discard_counts() {
    let block = pattern();

    for k in [136, 140, 1000] {
        let err = Err(Error::InvalidDiscardCount { count: k, size: 135 });

        assert_eq!(block.remove_first_bits(k), err);
        assert_eq!(block.remove_last_bits(k), err);
    }

    assert!(BitBlock::zeroed(0).remove_first_bits(0).is_ok());
    assert!(BitBlock::zeroed(0).remove_last_bits(1).is_err());
}

#[test]
fn byte_aligned_extraction() -> Result<(), Error> {
    let block = BitBlock::from_bytes(&[0xFF; 3], 17);

    for l in 0..=block.size() {
        for r in l..=block.size() {
            let sub = block.sub_block(l, r)?;

            assert_eq!(sub.size(), r - l);
            assert!(sub.iter().all(|bit| bit));
            assert_padding(&sub);
        }
    }

    for k in [0, 8, 16] {
        let trimmed = block.remove_first_bits(k)?;
        assert_eq!(trimmed.size(), 17 - k);
        assert!(trimmed.iter().all(|bit| bit));
        assert_padding(&trimmed);
    }
    assert!(block.remove_first_bits(block.size())?.is_empty());

    Ok(())
}
