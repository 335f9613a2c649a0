//! テスト用モックファイルシステム

use super::*;
use std::collections::HashMap;
use std::sync::RwLock;

/// canonicalize で辿るリンクの上限
const MAX_LINK_HOPS: usize = 40;

/// テスト用モックファイルシステム
///
/// パス文字列をキーにしたフラットなマップ。親ディレクトリは add_file では
/// 自動作成されないので、read_dir で辿らせたい階層は add_dir で登録する。
pub struct MockFs {
    files: RwLock<HashMap<String, MockFile>>,
}

struct MockFile {
    content: Vec<u8>,
    file_type: FsFileType,
}

impl MockFs {
    pub fn new() -> Self {
        Self {
            files: RwLock::new(HashMap::new()),
        }
    }

    /// ファイルを追加
    pub fn add_file(&self, path: &str, content: &str) {
        self.insert(path, content.as_bytes().to_vec(), FsFileType::File);
    }

    /// バイト列のファイルを追加
    pub fn add_bytes(&self, path: &str, content: &[u8]) {
        self.insert(path, content.to_vec(), FsFileType::File);
    }

    /// ディレクトリを追加
    pub fn add_dir(&self, path: &str) {
        self.insert(path, Vec::new(), FsFileType::Dir);
    }

    /// パッケージディレクトリと package.json をまとめて追加
    pub fn add_package(&self, dir: &str, package_json: &str) {
        self.add_dir(dir);
        self.add_file(&format!("{}/package.json", dir), package_json);
    }

    fn insert(&self, path: &str, content: Vec<u8>, file_type: FsFileType) {
        self.files.write().unwrap().insert(
            path.to_string(),
            MockFile { content, file_type },
        );
    }

    fn key(path: &Path) -> String {
        path.to_string_lossy().to_string()
    }
}

impl Default for MockFs {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for MockFs {
    fn exists(&self, path: &Path) -> bool {
        self.files.read().unwrap().contains_key(&Self::key(path))
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.files
            .read()
            .unwrap()
            .get(&Self::key(path))
            .map(|f| f.file_type == FsFileType::Dir)
            .unwrap_or(false)
    }

    fn read(&self, path: &Path) -> Result<Vec<u8>> {
        self.files
            .read()
            .unwrap()
            .get(&Self::key(path))
            .map(|f| f.content.clone())
            .ok_or_else(|| std::io::Error::new(std::io::ErrorKind::NotFound, "not found").into())
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        let bytes = self.read(path)?;
        String::from_utf8(bytes).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()).into()
        })
    }

    /// symlink_dir で登録したリンクをセグメントごとに辿る
    fn canonicalize(&self, path: &Path) -> Result<PathBuf> {
        let files = self.files.read().unwrap();
        let mut resolved = PathBuf::new();
        for component in path.absolutize().components() {
            resolved.push(component.as_os_str());
            let mut hops = 0;
            while let Some(link) = files
                .get(&Self::key(&resolved))
                .filter(|f| f.file_type == FsFileType::Symlink)
            {
                hops += 1;
                if hops > MAX_LINK_HOPS {
                    return Err(std::io::Error::new(
                        std::io::ErrorKind::InvalidInput,
                        "too many levels of symbolic links",
                    )
                    .into());
                }
                resolved = PathBuf::from(String::from_utf8_lossy(&link.content).to_string())
                    .absolutize();
            }
        }

        // add_file だけで登録した階層の親も存在するものとみなす
        let key = Self::key(&resolved);
        let nested = format!("{}/", key);
        if files.contains_key(&key) || files.keys().any(|k| k.starts_with(&nested)) {
            Ok(resolved)
        } else {
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "not found").into())
        }
    }

    fn write_atomic(&self, path: &Path, content: &[u8]) -> Result<()> {
        self.insert(&Self::key(path), content.to_vec(), FsFileType::File);
        Ok(())
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<FsDirEntry>> {
        let path_str = Self::key(path);
        let files = self.files.read().unwrap();

        match files.get(&path_str) {
            Some(file) if file.file_type == FsFileType::Dir => {}
            Some(_) => {
                return Err(ShellError::Io(std::io::Error::new(
                    std::io::ErrorKind::NotADirectory,
                    "Not a directory",
                )));
            }
            None => {
                return Err(ShellError::Io(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "not found",
                )));
            }
        }

        let prefix = if path_str.ends_with('/') {
            path_str.clone()
        } else {
            format!("{}/", path_str)
        };

        let entries = files
            .iter()
            .filter(|(k, _)| {
                // 直接の子のみ（サブディレクトリの中身は除外）
                k.strip_prefix(&prefix)
                    .map(|remainder| !remainder.is_empty() && !remainder.contains('/'))
                    .unwrap_or(false)
            })
            .map(|(k, v)| FsDirEntry {
                path: PathBuf::from(k),
                file_type: v.file_type,
            })
            .collect();

        Ok(entries)
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        self.add_dir(&Self::key(path));
        Ok(())
    }

    fn remove(&self, path: &Path) -> Result<()> {
        let path_str = Self::key(path);
        let nested = format!("{}/", path_str);
        self.files
            .write()
            .unwrap()
            .retain(|k, _| k != &path_str && !k.starts_with(&nested));
        Ok(())
    }

    fn copy_dir(&self, src: &Path, dst: &Path) -> Result<()> {
        let src_str = Self::key(src);
        let dst_str = Self::key(dst);

        if dst_str == src_str || dst_str.starts_with(&format!("{}/", src_str)) {
            return Err(ShellError::InvalidArgument(
                "Cannot copy directory into itself or its subdirectory".into(),
            ));
        }

        let copies: Vec<_> = {
            let files = self.files.read().unwrap();
            files
                .iter()
                .filter_map(|(path, file)| {
                    let relative = if path == &src_str {
                        ""
                    } else {
                        path.strip_prefix(&format!("{}/", src_str))?
                    };
                    let new_path = if relative.is_empty() {
                        dst_str.clone()
                    } else {
                        format!("{}/{}", dst_str, relative)
                    };
                    Some((new_path, file.content.clone(), file.file_type))
                })
                .collect()
        };

        for (path, content, file_type) in copies {
            self.insert(&path, content, file_type);
        }
        Ok(())
    }

    fn symlink_dir(&self, target: &Path, link: &Path) -> Result<()> {
        self.insert(
            &Self::key(link),
            Self::key(target).into_bytes(),
            FsFileType::Symlink,
        );
        Ok(())
    }
}
