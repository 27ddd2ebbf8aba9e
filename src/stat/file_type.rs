/// Platform-neutral file mode type bits
///
/// Mirrors the usual portable layout: a regular file has none of the type
/// bits set, every other kind sets one or more. Several kinds can be flagged
/// at once, [`ModeBits::classify`] decides which one wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ModeBits(u32);

impl ModeBits {
    pub const DIR: u32 = 1 << 31;
    pub const SYMLINK: u32 = 1 << 27;
    pub const DEVICE: u32 = 1 << 26;
    pub const NAMED_PIPE: u32 = 1 << 25;
    pub const SOCKET: u32 = 1 << 24;
    pub const CHAR_DEVICE: u32 = 1 << 21;
    pub const IRREGULAR: u32 = 1 << 19;

    /// All bits that describe the kind of an entry
    pub const TYPE_MASK: u32 = Self::DIR
        | Self::SYMLINK
        | Self::NAMED_PIPE
        | Self::SOCKET
        | Self::DEVICE
        | Self::CHAR_DEVICE
        | Self::IRREGULAR;

    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    const fn has(self, flag: u32) -> bool {
        self.0 & flag != 0
    }

    pub const fn is_regular(self) -> bool {
        self.0 & Self::TYPE_MASK == 0
    }

    pub const fn is_dir(self) -> bool {
        self.has(Self::DIR)
    }

    pub const fn is_symlink(self) -> bool {
        self.has(Self::SYMLINK)
    }

    pub const fn is_named_pipe(self) -> bool {
        self.has(Self::NAMED_PIPE)
    }

    pub const fn is_socket(self) -> bool {
        self.has(Self::SOCKET)
    }

    pub const fn is_device(self) -> bool {
        self.has(Self::DEVICE)
    }

    pub const fn is_char_device(self) -> bool {
        self.is_device() && self.has(Self::CHAR_DEVICE)
    }

    pub const fn is_block_device(self) -> bool {
        self.is_device() && !self.has(Self::CHAR_DEVICE)
    }

    /// Map the bits to a [`FileType`]. First match wins, in this order:
    /// regular, directory, symlink, pipe, socket, char device, block device.
    /// Anything else is [`FileType::Unspecified`].
    pub const fn classify(self) -> FileType {
        if self.is_regular() {
            FileType::Regular
        } else if self.is_dir() {
            FileType::Directory
        } else if self.is_symlink() {
            FileType::Symlink
        } else if self.is_named_pipe() {
            FileType::Pipe
        } else if self.is_socket() {
            FileType::Socket
        } else if self.is_char_device() {
            FileType::CharDevice
        } else if self.is_block_device() {
            FileType::BlockDevice
        } else {
            FileType::Unspecified
        }
    }

    /// Translate the `S_IFMT` part of a unix `st_mode`
    pub const fn from_unix_mode(mode: libc::mode_t) -> Self {
        let bits = match mode & libc::S_IFMT {
            libc::S_IFREG => 0,
            libc::S_IFDIR => Self::DIR,
            libc::S_IFLNK => Self::SYMLINK,
            libc::S_IFIFO => Self::NAMED_PIPE,
            libc::S_IFSOCK => Self::SOCKET,
            libc::S_IFCHR => Self::DEVICE | Self::CHAR_DEVICE,
            libc::S_IFBLK => Self::DEVICE,
            _ => Self::IRREGULAR,
        };
        Self(bits)
    }
}

/// Closed set of filesystem object kinds, with stable numeric codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum FileType {
    Unspecified = 0,
    Regular = 100,
    Symlink = 102,
    CharDevice = 103,
    BlockDevice = 104,
    Directory = 105,
    Pipe = 106,
    Socket = 109,
}

impl FileType {
    pub const ALL: [FileType; 8] = [
        FileType::Unspecified,
        FileType::Regular,
        FileType::Directory,
        FileType::Symlink,
        FileType::Pipe,
        FileType::Socket,
        FileType::CharDevice,
        FileType::BlockDevice,
    ];

    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Look up a variant by its numeric code
    pub fn from_code(code: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|t| i64::from(t.code()) == code)
    }
}

impl From<ModeBits> for FileType {
    fn from(mode: ModeBits) -> Self {
        mode.classify()
    }
}
