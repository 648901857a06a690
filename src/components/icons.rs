//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuBookOpen as FilePdf, LuCheck as Check, LuCopy as Copy, LuDownload as Download,
        LuEllipsisVertical as More, LuEye as Eye, LuFile as File,
        LuFileSpreadsheet as FileSpreadsheet, LuImage as FileImage, LuLink as Link,
        LuMail as Mail, LuMusic as FileAudio, LuPlus as Plus, LuSearch as Search,
        LuShare2 as Share, LuTrash2 as Trash, LuUpload as Upload, LuUser as User,
        LuVideo as FileVideo, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsCheckLg as Check, BsClipboard as Copy, BsCloudUpload as Upload,
        BsDownload as Download, BsEnvelope as Mail, BsEye as Eye, BsFileEarmark as File,
        BsFileEarmarkImage as FileImage, BsFileEarmarkMusic as FileAudio,
        BsFileEarmarkPdf as FilePdf, BsFileEarmarkPlay as FileVideo,
        BsFileEarmarkSpreadsheet as FileSpreadsheet, BsLink45deg as Link, BsPerson as User,
        BsPlusLg as Plus, BsSearch as Search, BsShare as Share,
        BsThreeDotsVertical as More, BsTrash as Trash, BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(SEARCH, Search);
themed_icon!(CLOSE, Close);
themed_icon!(UPLOAD, Upload);
themed_icon!(FILE, File);
themed_icon!(FILE_IMAGE, FileImage);
themed_icon!(FILE_VIDEO, FileVideo);
themed_icon!(FILE_AUDIO, FileAudio);
themed_icon!(FILE_PDF, FilePdf);
themed_icon!(FILE_SPREADSHEET, FileSpreadsheet);
themed_icon!(MORE, More);
themed_icon!(EYE, Eye);
themed_icon!(SHARE, Share);
themed_icon!(DOWNLOAD, Download);
themed_icon!(TRASH, Trash);
themed_icon!(COPY, Copy);
themed_icon!(CHECK, Check);
themed_icon!(MAIL, Mail);
themed_icon!(LINK, Link);
themed_icon!(USER, User);
themed_icon!(PLUS, Plus);
